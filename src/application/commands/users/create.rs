use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{Email, NewUser, Role, Username},
};

pub struct CreateUserCommand {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(&command.email)?;
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        self.ensure_email_available(&email, None).await?;
        self.ensure_username_available(&username, None).await?;

        let password_hash = self.hash_password(&command.password).await?;
        let new_user = NewUser::new(
            email,
            username,
            password_hash,
            command.role.unwrap_or_default(),
            self.clock.now(),
        );

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, role = %user.role, "created user");
        Ok(user.into())
    }
}
