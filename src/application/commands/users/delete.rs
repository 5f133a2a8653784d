use super::UserCommandService;
use crate::domain::{errors::DomainResult, user::UserId};

pub struct DeleteUserCommand {
    pub id: i64,
}

impl UserCommandService {
    pub async fn delete_user(&self, command: DeleteUserCommand) -> DomainResult<()> {
        let id = UserId::from(command.id);
        self.user_repo.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}
