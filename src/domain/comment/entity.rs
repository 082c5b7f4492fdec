// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: Option<UserId>,
    /// Comment this one replies to, if any.
    pub parent_id: Option<CommentId>,
    pub body: CommentBody,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: Option<UserId>,
    pub parent_id: Option<CommentId>,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub body: Option<CommentBody>,
    pub is_approved: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl CommentUpdate {
    pub fn new(id: CommentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            body: None,
            is_approved: None,
            updated_at,
        }
    }

    pub fn with_body(mut self, body: CommentBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_approval(mut self, is_approved: bool) -> Self {
        self.is_approved = Some(is_approved);
        self
    }
}
