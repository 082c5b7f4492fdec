// src/application/commands/posts/create.rs
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{PostCommandService, service::non_blank};
use crate::{
    application::{
        commands::retry::retry_on_conflict,
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        post::{
            NewPost, Post, PostBody, PostStatus, PostTitle, distinct_tags, effective_published_at,
        },
        slug::SLUG_FIELD,
        user::UserId,
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub subtitle: Option<String>,
    pub body_markdown: String,
    pub rendered_html: Option<String>,
    pub status: PostStatus,
    pub is_private: bool,
    pub author_id: Uuid,
    pub tags: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    subtitle: Option<String>,
    body_markdown: Option<String>,
    rendered_html: Option<String>,
    status: PostStatus,
    is_private: bool,
    author_id: Option<Uuid>,
    tags: Vec<String>,
    published_at: Option<DateTime<Utc>>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body_markdown = Some(body.into());
        self
    }

    pub fn rendered_html(mut self, html: Option<String>) -> Self {
        self.rendered_html = html;
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn author(mut self, author_id: Uuid) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = published_at;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            subtitle: self.subtitle,
            body_markdown: self.body_markdown.ok_or("body_markdown is required")?,
            rendered_html: self.rendered_html,
            status: self.status,
            is_private: self.is_private,
            author_id: self.author_id.ok_or("author_id is required")?,
            tags: self.tags,
            published_at: self.published_at,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title.clone())?;
        let body = PostBody::new(command.body_markdown.clone())?;
        let author_id = UserId::from(command.author_id);

        if self.user_repo.find_by_id(author_id).await?.is_none() {
            return Err(ApplicationError::not_found("author not found"));
        }

        let created = retry_on_conflict("create_post", || {
            self.try_create(&command, &title, &body, author_id)
        })
        .await?;

        tracing::info!(
            post_id = created.id.0,
            slug = %created.slug,
            tags = created.tags.len(),
            "created post"
        );
        Ok(created.into())
    }

    async fn try_create(
        &self,
        command: &CreatePostCommand,
        title: &PostTitle,
        body: &PostBody,
        author_id: UserId,
    ) -> ApplicationResult<Post> {
        let tags = self.tag_resolver.resolve_tags(&command.tags).await?;
        let slug = self
            .slug_service
            .unique_slug(self.read_repo.as_ref(), SLUG_FIELD, title.as_str())
            .await?;
        let now = self.clock.now();

        let new_post = NewPost {
            slug,
            title: title.clone(),
            subtitle: non_blank(command.subtitle.clone()),
            body_markdown: body.clone(),
            rendered_html: non_blank(command.rendered_html.clone()),
            status: command.status,
            is_private: command.is_private,
            author_id,
            tags: distinct_tags(tags),
            created_at: now,
            updated_at: now,
            published_at: effective_published_at(command.status, command.published_at, now),
        };

        Ok(self.write_repo.insert(new_post).await?)
    }
}
