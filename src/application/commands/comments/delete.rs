use super::CommentCommandService;
use crate::{application::error::ApplicationResult, domain::comment::CommentId};
use uuid::Uuid;

pub struct DeleteCommentCommand {
    pub id: Uuid,
}

impl CommentCommandService {
    /// Marks the comment deleted; replies keep pointing at it.
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::from(command.id);
        self.load(id).await?;

        self.comment_repo.soft_delete(id, self.clock.now()).await?;
        tracing::info!(comment_id = %id, "deleted comment");
        Ok(())
    }
}
