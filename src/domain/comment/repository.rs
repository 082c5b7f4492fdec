use crate::domain::comment::entity::{Comment, CommentUpdate, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Reads never return soft-deleted comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment>;
    async fn soft_delete(&self, id: CommentId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn list_by_post(&self, post_id: PostId, page: PageRequest) -> DomainResult<Vec<Comment>>;
    async fn list_by_author(&self, author_id: UserId, page: PageRequest)
    -> DomainResult<Vec<Comment>>;
}
