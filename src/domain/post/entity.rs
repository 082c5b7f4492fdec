// src/domain/post/entity.rs
use std::collections::HashSet;

use crate::domain::post::value_objects::{PostBody, PostId, PostStatus, PostTitle};
use crate::domain::slug::Slug;
use crate::domain::tag::Tag;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub slug: Slug,
    pub title: PostTitle,
    pub subtitle: Option<String>,
    pub body_markdown: PostBody,
    pub rendered_html: Option<String>,
    pub status: PostStatus,
    pub is_private: bool,
    pub author_id: UserId,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Published;
        self.published_at = Some(now);
        self.updated_at = now;
    }
}

/// Publication timestamp a post should carry for `status`. Published posts
/// without an explicit timestamp are stamped with `now`.
pub fn effective_published_at(
    status: PostStatus,
    requested: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (status, requested) {
        (PostStatus::Published, None) => Some(now),
        (_, requested) => requested,
    }
}

/// Drops repeated tags while keeping first-seen order; attaching a tag twice
/// is the same as attaching it once.
pub fn distinct_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.into_iter().filter(|tag| seen.insert(tag.id)).collect()
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub slug: Slug,
    pub title: PostTitle,
    pub subtitle: Option<String>,
    pub body_markdown: PostBody,
    pub rendered_html: Option<String>,
    pub status: PostStatus,
    pub is_private: bool,
    pub author_id: UserId,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub slug: Option<Slug>,
    pub title: Option<PostTitle>,
    /// `Some("")` clears the stored subtitle.
    pub subtitle: Option<String>,
    pub body_markdown: Option<PostBody>,
    /// `Some("")` clears the stored HTML.
    pub rendered_html: Option<String>,
    pub status: Option<PostStatus>,
    pub is_private: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
    /// `Some` replaces the whole tag set, `None` leaves it untouched.
    pub tags: Option<Vec<Tag>>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug: None,
            title: None,
            subtitle: None,
            body_markdown: None,
            rendered_html: None,
            status: None,
            is_private: None,
            published_at: None,
            tags: None,
            updated_at,
        }
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_body(mut self, body: PostBody) -> Self {
        self.body_markdown = Some(body);
        self
    }

    pub fn with_rendered_html(mut self, html: String) -> Self {
        self.rendered_html = Some(html);
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(distinct_tags(tags));
        self
    }
}
