use crate::domain::post::{Post, PostStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TagDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub body_markdown: String,
    #[serde(default)]
    pub rendered_html: Option<String>,
    pub status: PostStatus,
    pub is_private: bool,
    pub author_id: Uuid,
    pub tags: Vec<TagDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            slug: post.slug.into_inner(),
            title: post.title.into_inner(),
            subtitle: post.subtitle,
            body_markdown: post.body_markdown.into_inner(),
            rendered_html: post.rendered_html,
            status: post.status,
            is_private: post.is_private,
            author_id: post.author_id.into(),
            tags: post.tags.into_iter().map(TagDto::from).collect(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            published_at: post.published_at,
        }
    }
}
