use super::UserQueryService;
use crate::{application::dto::UserDto, domain::errors::DomainResult};

pub const DEFAULT_LIMIT: u64 = 10;

pub struct ListUsersQuery {
    pub limit: i64,
    pub offset: i64,
}

impl UserQueryService {
    pub async fn list_users(&self, query: ListUsersQuery) -> DomainResult<Vec<UserDto>> {
        let limit = normalize_limit(query.limit);
        let offset = normalize_offset(query.offset);

        let users = self.users.list(limit, offset).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}

fn normalize_limit(limit: i64) -> u64 {
    u64::try_from(limit)
        .ok()
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_LIMIT)
}

fn normalize_offset(offset: i64) -> u64 {
    u64::try_from(offset).unwrap_or(0)
}
