// src/application/commands/posts/publish.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{PostId, PostStatus, PostUpdate},
};

pub struct PublishPostCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Already published posts are returned unchanged, keeping their
    /// original publication time.
    pub async fn publish_post(&self, command: PublishPostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self.load(id).await?;

        if post.status == PostStatus::Published && post.published_at.is_some() {
            return Ok(post.into());
        }

        post.publish(self.clock.now());
        let mut update = PostUpdate::new(id, post.updated_at).with_status(post.status);
        if let Some(published_at) = post.published_at {
            update = update.with_published_at(published_at);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(post_id = updated.id.0, "published post");
        Ok(updated.into())
    }
}
