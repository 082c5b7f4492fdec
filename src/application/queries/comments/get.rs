use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};
use uuid::Uuid;

pub struct GetCommentQuery {
    pub id: Uuid,
}

impl CommentQueryService {
    pub async fn get_comment(&self, query: GetCommentQuery) -> ApplicationResult<CommentDto> {
        let comment = self
            .comment_repo
            .find_by_id(CommentId::from(query.id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        Ok(comment.into())
    }
}
