use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{Email, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    /// All users, oldest first.
    async fn list(&self) -> DomainResult<Vec<User>>;
}
