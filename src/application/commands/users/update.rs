use super::UserCommandService;
use crate::{
    application::dto::UserDto,
    domain::{
        errors::DomainResult,
        user::{UserChanges, UserId},
    },
};

pub struct UpdateUserCommand {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(&self, command: UpdateUserCommand) -> DomainResult<UserDto> {
        let mut user = self.user_repo.get_by_id(UserId::from(command.id)).await?;

        let mut changes = UserChanges {
            name: command.name,
            email: command.email,
            password: None,
        };
        if let Some(password) = command.password {
            changes.password = Some(self.password_hasher.hash(&password).await?);
        }

        user.apply(changes);
        user.touch(self.clock.now());

        let user = self.user_repo.update(&user).await?;
        tracing::info!(user_id = %user.id, "user updated");
        Ok(user.into())
    }
}
