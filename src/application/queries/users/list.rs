use super::UserQueryService;
use crate::application::{dto::UserDto, error::ApplicationResult};

#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery;

impl UserQueryService {
    /// Every user, oldest first.
    pub async fn list_users(&self, _query: ListUsersQuery) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
