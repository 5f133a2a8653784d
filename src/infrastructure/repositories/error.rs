use crate::domain::errors::DomainError;
use sea_orm::{DbErr, SqlErr};

/// Collapse a raw SQL failure into the domain sentinel set. Anything that is
/// not a missing row or a unique violation is logged and reported as
/// `InternalServerError`.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::NotFound,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => DomainError::Conflict,
        other => {
            tracing::error!(error = %other, "database query failed");
            DomainError::InternalServerError
        }
    }
}

/// ORM counterpart of [`map_sqlx`].
pub fn map_db_err(err: DbErr) -> DomainError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return DomainError::Conflict;
    }

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => DomainError::NotFound,
        other => {
            tracing::error!(error = %other, "orm query failed");
            DomainError::InternalServerError
        }
    }
}
