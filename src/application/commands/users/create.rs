use super::UserCommandService;
use crate::{
    application::dto::UserDto,
    domain::{
        errors::{DomainError, DomainResult},
        user::NewUser,
    },
};

pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> DomainResult<UserDto> {
        self.ensure_email_available(&command.email).await?;

        let password = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser::new(command.name, command.email, password, self.clock.now());
        let user = self.user_repo.create(new_user).await?;

        tracing::info!(user_id = %user.id, "user created");
        Ok(user.into())
    }

    async fn ensure_email_available(&self, email: &str) -> DomainResult<()> {
        match self.user_repo.get_by_email(email).await {
            Ok(_) => Err(DomainError::Conflict),
            Err(DomainError::NotFound) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
