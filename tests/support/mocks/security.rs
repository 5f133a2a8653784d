// tests/support/mocks/security.rs
use async_trait::async_trait;
use user_service::application::ports::security::PasswordHasher;
use user_service::domain::errors::DomainResult;

/// Deterministic stand-in for argon2: prefixes the plaintext.
#[derive(Clone, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> DomainResult<String> {
        Ok(format!("hashed:{password}"))
    }
}
