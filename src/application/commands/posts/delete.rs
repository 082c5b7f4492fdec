// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{application::error::ApplicationResult, domain::post::PostId};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Comments and tag associations go with the post; tags stay.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        let post = self.load(id).await?;

        self.write_repo.delete(post.id).await?;
        tracing::info!(post_id = id.0, slug = %post.slug, "deleted post");
        Ok(())
    }
}
