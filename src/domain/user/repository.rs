// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::UserId,
};
use async_trait::async_trait;

/// Persistence contract for users. Missing rows are reported as
/// `DomainError::NotFound`, never as `Ok(None)`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: UserId) -> DomainResult<User>;

    async fn get_by_email(&self, email: &str) -> DomainResult<User>;

    async fn create(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, user: &User) -> DomainResult<User>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;

    async fn list(&self, limit: u64, offset: u64) -> DomainResult<Vec<User>>;
}
