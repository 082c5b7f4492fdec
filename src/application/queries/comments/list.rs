use super::CommentQueryService;
use crate::{
    application::{
        dto::{CommentDto, OffsetPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{pagination::PageRequest, post::PostId, user::UserId},
};
use uuid::Uuid;

pub struct ListCommentsByPostQuery {
    pub post_id: i64,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub struct ListCommentsByUserQuery {
    pub user_id: Uuid,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl CommentQueryService {
    /// Newest first, soft-deleted comments excluded.
    pub async fn list_comments_by_post(
        &self,
        query: ListCommentsByPostQuery,
    ) -> ApplicationResult<OffsetPage<CommentDto>> {
        let post_id = PostId::new(query.post_id)?;
        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(ApplicationError::not_found("post not found"));
        }

        let page = PageRequest::new(query.limit, query.offset);
        let comments = self.comment_repo.list_by_post(post_id, page).await?;
        Ok(OffsetPage::new(
            comments.into_iter().map(Into::into).collect(),
            page,
        ))
    }

    pub async fn list_comments_by_user(
        &self,
        query: ListCommentsByUserQuery,
    ) -> ApplicationResult<OffsetPage<CommentDto>> {
        let user_id = UserId::from(query.user_id);
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }

        let page = PageRequest::new(query.limit, query.offset);
        let comments = self.comment_repo.list_by_author(user_id, page).await?;
        Ok(OffsetPage::new(
            comments.into_iter().map(Into::into).collect(),
            page,
        ))
    }
}
