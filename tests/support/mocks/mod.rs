// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール

pub mod security;
pub mod time;
pub mod user_repo;

pub use security::PlainPasswordHasher;
pub use time::{FixedClock, fixed_now};
pub use user_repo::{FailingUserRepo, InMemoryUserRepo, sample_user};
