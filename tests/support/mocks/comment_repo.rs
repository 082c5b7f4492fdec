// tests/support/mocks/comment_repo.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use solblog::domain::comment::{Comment, CommentId, CommentRepository, CommentUpdate, NewComment};
use solblog::domain::errors::{DomainError, DomainResult};
use solblog::domain::pagination::PageRequest;
use solblog::domain::post::PostId;
use solblog::domain::user::UserId;

/// Keeps soft-deleted rows around so tests can check they were only marked.
#[derive(Default)]
pub struct InMemoryComments {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryComments {
    pub fn raw(&self, id: CommentId) -> Option<Comment> {
        self.comments.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }

    fn live<F>(&self, page: PageRequest, keep: F) -> Vec<Comment>
    where
        F: Fn(&Comment) -> bool,
    {
        let mut rows: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| !c.is_deleted() && keep(c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect()
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let created = Comment {
            id: comment.id,
            post_id: comment.post_id,
            author_id: comment.author_id,
            parent_id: comment.parent_id,
            body: comment.body,
            is_approved: false,
            created_at: comment.created_at,
            updated_at: comment.created_at,
            deleted_at: None,
        };
        self.comments.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .iter_mut()
            .find(|c| c.id == update.id && !c.is_deleted())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        if let Some(body) = update.body {
            comment.body = body;
        }
        if let Some(approved) = update.is_approved {
            comment.is_approved = approved;
        }
        comment.updated_at = update.updated_at;
        Ok(comment.clone())
    }

    async fn soft_delete(&self, id: CommentId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .iter_mut()
            .find(|c| c.id == id && !c.is_deleted())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.deleted_at = Some(deleted_at);
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.raw(id).filter(|c| !c.is_deleted()))
    }

    async fn list_by_post(&self, post_id: PostId, page: PageRequest) -> DomainResult<Vec<Comment>> {
        Ok(self.live(page, |c| c.post_id == post_id))
    }

    async fn list_by_author(
        &self,
        author_id: UserId,
        page: PageRequest,
    ) -> DomainResult<Vec<Comment>> {
        Ok(self.live(page, |c| c.author_id == Some(author_id)))
    }
}
