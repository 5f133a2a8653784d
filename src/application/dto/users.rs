use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::serde_time;

/// Public view of a user. The stored password has no counterpart here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "serde_time::serialize")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serde_time::serialize")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// `{"data": ...}` wrapper used by every successful response body.
#[derive(Debug, Clone, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;

    #[test]
    fn serialized_user_has_no_password() {
        let now = Utc::now();
        let dto = UserDto::from(User {
            id: UserId(7),
            name: "bob".into(),
            email: "bob@example.com".into(),
            password: "hunter2".into(),
            created_at: now,
            updated_at: now,
        });

        let value = serde_json::to_value(DataEnvelope::new(dto)).unwrap();
        let data = value.get("data").unwrap();
        assert_eq!(data.get("id").and_then(|v| v.as_i64()), Some(7));
        assert_eq!(data.get("email").and_then(|v| v.as_str()), Some("bob@example.com"));
        assert!(data.get("password").is_none());
    }
}
