use super::UserCommandService;
use crate::{application::error::ApplicationResult, domain::user::UserId};
use uuid::Uuid;

pub struct DeleteUserCommand {
    pub user_id: Uuid,
}

impl UserCommandService {
    /// Removes the user together with their posts; their comments stay with
    /// the author cleared.
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let user_id = UserId::from(command.user_id);
        let user = self.load(user_id).await?;

        self.user_repo.delete(user_id).await?;
        tracing::info!(user_id = %user_id, username = %user.username, "deleted user");
        Ok(())
    }
}
