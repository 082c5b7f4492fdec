use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{Email, Role, UserId, UserUpdate, Username},
};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub username: Option<String>,
    pub role: Option<Role>,
    /// Replaces the stored hash without checking the old password.
    pub password: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(&self, command: UpdateUserCommand) -> ApplicationResult<UserDto> {
        let user_id = UserId::from(command.user_id);
        let user = self.load(user_id).await?;

        let mut update = UserUpdate::new(user_id, self.clock.now());

        if let Some(email) = command.email.map(Email::new).transpose()? {
            if email != user.email {
                self.ensure_email_available(&email, Some(user_id)).await?;
                update = update.with_email(email);
            }
        }

        if let Some(username) = command.username.map(Username::new).transpose()? {
            if username != user.username {
                self.ensure_username_available(&username, Some(user_id)).await?;
                update = update.with_username(username);
            }
        }

        if let Some(role) = command.role {
            update = update.with_role(role);
        }

        if let Some(password) = command.password {
            validate_password(&password)?;
            update = update.with_password_hash(self.hash_password(&password).await?);
        }

        if update.is_empty() {
            return Ok(user.into());
        }

        let updated = self.user_repo.update(update).await?;
        tracing::info!(user_id = %updated.id, "updated user");
        Ok(updated.into())
    }
}
