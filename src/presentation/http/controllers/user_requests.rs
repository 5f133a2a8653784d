use crate::application::commands::users::{CreateUserCommand, UpdateUserCommand};
use crate::application::dto::UserDto;
use crate::presentation::http::error::{HttpError, HttpResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl CreateUserRequest {
    /// Presence check only: every field must be non-empty.
    pub fn into_command(self) -> HttpResult<CreateUserCommand> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(HttpError::bad_request(
                "name, email and password are required",
            ));
        }

        Ok(CreateUserCommand {
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}

/// Partial update. Absent or empty fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_command(self, id: i64) -> UpdateUserCommand {
        UpdateUserCommand {
            id,
            name: non_empty(self.name),
            email: non_empty(self.email),
            password: non_empty(self.password),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ---- response wrappers used for OpenAPI schemas ----
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub data: UserDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub data: Vec<UserDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_every_field() {
        let request = CreateUserRequest {
            name: "carol".into(),
            email: String::new(),
            password: "pw".into(),
        };
        assert!(request.into_command().is_err());
    }

    #[test]
    fn update_drops_empty_strings() {
        let request = UpdateUserRequest {
            name: Some(String::new()),
            email: Some("new@example.com".into()),
            password: None,
        };
        let command = request.into_command(3);
        assert_eq!(command.id, 3);
        assert!(command.name.is_none());
        assert_eq!(command.email.as_deref(), Some("new@example.com"));
    }
}
