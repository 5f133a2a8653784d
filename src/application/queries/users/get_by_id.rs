use super::UserQueryService;
use crate::{
    application::dto::UserDto,
    domain::{errors::DomainResult, user::UserId},
};

pub struct GetUserQuery {
    pub id: i64,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> DomainResult<UserDto> {
        self.users
            .get_by_id(UserId::from(query.id))
            .await
            .map(Into::into)
    }
}
