use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: Uuid,
    pub post_id: i64,
    #[serde(default)]
    pub author_id: Option<Uuid>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    pub body: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            post_id: comment.post_id.into(),
            author_id: comment.author_id.map(Into::into),
            parent_id: comment.parent_id.map(Into::into),
            body: comment.body.into_inner(),
            is_approved: comment.is_approved,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
