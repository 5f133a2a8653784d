// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::DeleteUserCommand,
    dto::{DataEnvelope, UserDto},
    queries::users::{GetUserQuery, ListUsersQuery},
};
use crate::presentation::http::controllers::user_requests::{
    CreateUserRequest, UpdateUserRequest,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, Pagination, UserIdPath};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(
        ("limit" = Option<i64>, Query, description = "Page size; values <= 0 use 10"),
        ("offset" = Option<i64>, Query, description = "Rows to skip; negative values use 0")
    ),
    responses(
        (status = 200, description = "Users ordered by id.", body = crate::presentation::http::controllers::user_requests::UserListResponse),
        (status = 500, description = "Persistence failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    page: Pagination,
) -> HttpResult<Json<DataEnvelope<Vec<UserDto>>>> {
    state
        .services
        .user_queries
        .list_users(ListUsersQuery {
            limit: page.limit,
            offset: page.offset,
        })
        .await
        .into_http()
        .map(|users| Json(DataEnvelope::new(users)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user.", body = crate::presentation::http::controllers::user_requests::UserResponse),
        (status = 400, description = "Id is not an integer.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    UserIdPath(id): UserIdPath,
) -> HttpResult<Json<DataEnvelope<UserDto>>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { id })
        .await
        .into_http()
        .map(|user| Json(DataEnvelope::new(user)))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = crate::presentation::http::controllers::user_requests::CreateUserRequest,
    responses(
        (status = 201, description = "User created.", body = crate::presentation::http::controllers::user_requests::UserResponse),
        (status = 400, description = "Missing fields or malformed JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Email already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> HttpResult<(StatusCode, Json<DataEnvelope<UserDto>>)> {
    let command = payload.into_command()?;

    let user = state
        .services
        .user_commands
        .create_user(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(DataEnvelope::new(user))))
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = crate::presentation::http::controllers::user_requests::UpdateUserRequest,
    responses(
        (status = 200, description = "User updated.", body = crate::presentation::http::controllers::user_requests::UserResponse),
        (status = 400, description = "Invalid id or malformed JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Email already registered.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    UserIdPath(id): UserIdPath,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> HttpResult<Json<DataEnvelope<UserDto>>> {
    state
        .services
        .user_commands
        .update_user(payload.into_command(id))
        .await
        .into_http()
        .map(|user| Json(DataEnvelope::new(user)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted."),
        (status = 400, description = "Id is not an integer.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    UserIdPath(id): UserIdPath,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete_user(DeleteUserCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
