use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::comment::{CommentBody, CommentId, CommentUpdate},
};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct UpdateCommentCommand {
    pub id: Uuid,
    pub body: Option<String>,
    pub is_approved: Option<bool>,
}

impl CommentCommandService {
    pub async fn update_comment(
        &self,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let id = CommentId::from(command.id);
        let body = command.body.map(CommentBody::new).transpose()?;
        let comment = self.load(id).await?;

        if body.is_none() && command.is_approved.is_none() {
            return Ok(comment.into());
        }

        let mut update = CommentUpdate::new(id, self.clock.now());
        if let Some(body) = body {
            update = update.with_body(body);
        }
        if let Some(is_approved) = command.is_approved {
            update = update.with_approval(is_approved);
        }

        let updated = self.comment_repo.update(update).await?;
        tracing::info!(comment_id = %updated.id, approved = updated.is_approved, "updated comment");
        Ok(updated.into())
    }
}
