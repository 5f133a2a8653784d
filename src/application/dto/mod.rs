pub mod serde_time;
pub mod users;

pub use users::{DataEnvelope, UserDto};
