mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetUserQuery;
pub use list::{DEFAULT_LIMIT, ListUsersQuery};
pub use service::UserQueryService;
