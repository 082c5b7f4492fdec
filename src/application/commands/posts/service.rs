// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        post::{Post, PostId, PostReadRepository, PostWriteRepository},
        slug::UniqueSlugService,
        tag::TagResolver,
        user::UserRepository,
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
    pub(super) tag_resolver: Arc<TagResolver>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_service: Arc<UniqueSlugService>,
        tag_resolver: Arc<TagResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            slug_service,
            tag_resolver,
            clock,
        }
    }

    pub(super) async fn load(&self, id: PostId) -> ApplicationResult<Post> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }
}

/// Blank optional text is stored as absent.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
