// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub email: Email,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: Email,
        username: Username,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            email,
            username,
            password_hash,
            role,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub email: Option<Email>,
    pub username: Option<Username>,
    pub role: Option<Role>,
    pub password_hash: Option<PasswordHash>,
    pub updated_at: DateTime<Utc>,
}

impl UserUpdate {
    pub fn new(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: None,
            username: None,
            role: None,
            password_hash: None,
            updated_at,
        }
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.role.is_none()
            && self.password_hash.is_none()
    }
}
