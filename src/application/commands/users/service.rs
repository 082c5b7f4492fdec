use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, time::Clock},
};
use crate::domain::user::{Email, PasswordHash, User, UserId, UserRepository, Username};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            clock,
        }
    }

    pub(super) async fn load(&self, id: UserId) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    pub(super) async fn hash_password(&self, password: &str) -> ApplicationResult<PasswordHash> {
        let hashed = self.password_hasher.hash(password).await?;
        Ok(PasswordHash::new(hashed)?)
    }

    pub(super) async fn ensure_email_available(
        &self,
        email: &Email,
        owner: Option<UserId>,
    ) -> ApplicationResult<()> {
        match self.user_repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ApplicationError::conflict("email already registered"))
            }
            _ => Ok(()),
        }
    }

    pub(super) async fn ensure_username_available(
        &self,
        username: &Username,
        owner: Option<UserId>,
    ) -> ApplicationResult<()> {
        match self.user_repo.find_by_username(username).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ApplicationError::conflict("username already exists"))
            }
            _ => Ok(()),
        }
    }
}
