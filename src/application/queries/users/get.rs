use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};
use uuid::Uuid;

pub struct GetUserQuery {
    pub id: Uuid,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(UserId::from(query.id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(user.into())
    }
}
