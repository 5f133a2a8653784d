// src/infrastructure/repositories/mod.rs
mod error;
mod users;

pub use users::{SeaOrmUserRepository, SqliteUserRepository};
