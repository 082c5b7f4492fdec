use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{Comment, CommentId, CommentRepository},
        post::PostReadRepository,
        user::UserRepository,
    },
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
            user_repo,
            clock,
        }
    }

    pub(super) async fn load(&self, id: CommentId) -> ApplicationResult<Comment> {
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }
}
