use super::{UserCommandService, password::validate_password};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{UserId, UserUpdate},
};
use uuid::Uuid;

pub struct ChangePasswordCommand {
    pub user_id: Uuid,
    pub current_password: String,
    pub new_password: String,
}

impl UserCommandService {
    pub async fn change_password(&self, command: ChangePasswordCommand) -> ApplicationResult<()> {
        let user_id = UserId::from(command.user_id);

        if command.new_password == command.current_password {
            return Err(ApplicationError::validation(
                "new password must differ from the current one",
            ));
        }
        validate_password(&command.new_password)?;

        let user = self.load(user_id).await?;
        self.password_hasher
            .verify(&command.current_password, user.password_hash.as_str())
            .await?;

        let password_hash = self.hash_password(&command.new_password).await?;
        let update = UserUpdate::new(user_id, self.clock.now()).with_password_hash(password_hash);
        self.user_repo.update(update).await?;

        tracing::info!(user_id = %user_id, "changed password");
        Ok(())
    }
}
