use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentBody, CommentId, NewComment},
        post::PostId,
        user::UserId,
    },
};
use uuid::Uuid;

pub struct CreateCommentCommand {
    pub post_id: i64,
    /// Anonymous when absent.
    pub author_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
    pub body: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post_id = PostId::new(command.post_id)?;
        let body = CommentBody::new(command.body)?;

        if self.post_repo.find_by_id(post_id).await?.is_none() {
            return Err(ApplicationError::not_found("post not found"));
        }

        let author_id = command.author_id.map(UserId::from);
        if let Some(author_id) = author_id {
            if self.user_repo.find_by_id(author_id).await?.is_none() {
                return Err(ApplicationError::not_found("author not found"));
            }
        }

        let parent_id = command.parent_id.map(CommentId::from);
        if let Some(parent_id) = parent_id {
            let parent = self
                .comment_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("parent comment not found"))?;
            if parent.post_id != post_id {
                return Err(ApplicationError::validation(
                    "parent comment belongs to a different post",
                ));
            }
        }

        let new_comment = NewComment {
            id: CommentId::generate(),
            post_id,
            author_id,
            parent_id,
            body,
            created_at: self.clock.now(),
        };

        let comment = self.comment_repo.insert(new_comment).await?;
        tracing::info!(comment_id = %comment.id, post_id = post_id.0, "created comment");
        Ok(comment.into())
    }
}
