use crate::{
    application::ports::security::PasswordHasher,
    domain::errors::{DomainError, DomainResult},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher as _, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| {
                    tracing::error!(error = %err, "password hashing failed");
                    DomainError::InternalServerError
                })
        })
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "password hashing task panicked");
            DomainError::InternalServerError
        })?
    }
}
