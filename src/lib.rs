//! Layered user CRUD service: HTTP handlers over use cases over a repository
//! backed by SQLite or MySQL.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
