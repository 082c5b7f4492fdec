// tests/support/mocks/user_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use solblog::domain::errors::{DomainError, DomainResult};
use solblog::domain::user::{Email, NewUser, User, UserId, UserRepository, UserUpdate, Username};

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let user = User {
            id: new_user.id,
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }
}
