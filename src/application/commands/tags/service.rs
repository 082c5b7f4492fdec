// src/application/commands/tags/service.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        slug::UniqueSlugService,
        tag::{Tag, TagId, TagName, TagRepository},
    },
};

pub struct TagCommandService {
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<UniqueSlugService>,
}

impl TagCommandService {
    pub fn new(tag_repo: Arc<dyn TagRepository>, slug_service: Arc<UniqueSlugService>) -> Self {
        Self {
            tag_repo,
            slug_service,
        }
    }

    pub(super) async fn load(&self, id: TagId) -> ApplicationResult<Tag> {
        self.tag_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))
    }

    /// Fails when a tag other than `owner` already carries `name`.
    pub(super) async fn ensure_name_free(
        &self,
        name: &TagName,
        owner: Option<TagId>,
    ) -> ApplicationResult<()> {
        match self.tag_repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != owner => Err(ApplicationError::conflict(
                format!("tag '{name}' already exists"),
            )),
            _ => Ok(()),
        }
    }
}
