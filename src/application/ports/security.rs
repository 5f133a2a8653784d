// src/application/ports/security.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Turn a plaintext password into the value that gets persisted.
    async fn hash(&self, password: &str) -> DomainResult<String>;
}
