// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Closed set of failures shared by every layer. Variants carry no payload so
/// callers compare them directly; the root cause of an `InternalServerError`
/// is logged where it happens and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("internal server error")]
    InternalServerError,
    #[error("your requested item is not found")]
    NotFound,
    #[error("your item already exists")]
    Conflict,
    #[error("bad request")]
    BadRequest,
    #[error("invalid credentials")]
    InvalidCredentials,
}
