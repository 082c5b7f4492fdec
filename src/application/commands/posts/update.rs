use chrono::{DateTime, Utc};

use super::PostCommandService;
use crate::{
    application::{
        commands::{
            retry::retry_on_conflict,
            slugs::{SlugChange, apply_slug_change},
        },
        dto::PostDto,
        error::ApplicationResult,
    },
    domain::post::{
        Post, PostBody, PostId, PostStatus, PostTitle, PostUpdate, effective_published_at,
    },
};

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body_markdown: Option<String>,
    pub rendered_html: Option<String>,
    pub status: Option<PostStatus>,
    pub is_private: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
    /// Empty string clears the slug and derives a new one from the title.
    pub slug: Option<String>,
    /// `Some(vec![])` detaches every tag.
    pub tags: Option<Vec<String>>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let title = command.title.clone().map(PostTitle::new).transpose()?;
        let body = command.body_markdown.clone().map(PostBody::new).transpose()?;

        let updated = retry_on_conflict("update_post", || {
            self.try_update(id, &command, title.as_ref(), body.as_ref())
        })
        .await?;

        tracing::info!(post_id = updated.id.0, slug = %updated.slug, "updated post");
        Ok(updated.into())
    }

    async fn try_update(
        &self,
        id: PostId,
        command: &UpdatePostCommand,
        title: Option<&PostTitle>,
        body: Option<&PostBody>,
    ) -> ApplicationResult<Post> {
        let post = self.load(id).await?;
        let now = self.clock.now();
        let mut update = PostUpdate::new(id, now);

        if let Some(names) = &command.tags {
            let tags = self.tag_resolver.resolve_tags(names).await?;
            update = update.with_tags(tags);
        }

        let source_title = title.unwrap_or(&post.title);
        let change = SlugChange::from_request(command.slug.clone());
        if let Some(slug) = apply_slug_change(
            &self.slug_service,
            self.read_repo.as_ref(),
            &post.slug,
            &change,
            source_title.as_str(),
        )
        .await?
        {
            update = update.with_slug(slug);
        }

        if let Some(title) = title {
            update = update.with_title(title.clone());
        }
        if let Some(body) = body {
            update = update.with_body(body.clone());
        }
        if let Some(subtitle) = &command.subtitle {
            update = update.with_subtitle(subtitle.trim().to_string());
        }
        if let Some(html) = &command.rendered_html {
            update = update.with_rendered_html(html.clone());
        }
        if let Some(is_private) = command.is_private {
            update = update.with_private(is_private);
        }

        let status = command.status.unwrap_or(post.status);
        if command.status.is_some() {
            update = update.with_status(status);
        }
        let requested = command.published_at.or(post.published_at);
        if let Some(published_at) = effective_published_at(status, requested, now) {
            if post.published_at != Some(published_at) {
                update = update.with_published_at(published_at);
            }
        }

        Ok(self.write_repo.update(update).await?)
    }
}
