// src/presentation/http/openapi.rs
use axum::Router;
use serde::Serialize;
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::users::create_user,
        crate::presentation::http::controllers::users::update_user,
        crate::presentation::http::controllers::users::delete_user,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::user_requests::CreateUserRequest,
            crate::presentation::http::controllers::user_requests::UpdateUserRequest,
            crate::presentation::http::controllers::user_requests::UserResponse,
            crate::presentation::http::controllers::user_requests::UserListResponse,
            crate::application::dto::UserDto
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "User Service API",
        description = "CRUD service for a single user resource",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, backed by the generated document at
/// [`OPENAPI_JSON_PATH`].
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
