// tests/support/builders.rs
use super::mocks::{PlainPasswordHasher, fixed_now};
use solblog::domain::user::{Email, PasswordHash, Role, User, UserId, Username};

pub struct UserBuilder {
    username: String,
    password: String,
    role: Role,
}

impl UserBuilder {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            password: "correct horse".to_string(),
            role: Role::Administrator,
        }
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::generate(),
            email: Email::new(format!("{}@example.com", self.username)).unwrap(),
            username: Username::new(self.username).unwrap(),
            password_hash: PasswordHash::new(PlainPasswordHasher::hash_of(&self.password)).unwrap(),
            role: self.role,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
