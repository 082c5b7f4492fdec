// src/application/commands/tags/update.rs
use super::TagCommandService;
use crate::{
    application::{
        commands::{
            retry::retry_on_conflict,
            slugs::{SlugChange, apply_slug_change},
        },
        dto::TagDto,
        error::ApplicationResult,
    },
    domain::tag::{Tag, TagId, TagName, TagUpdate},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateTagCommand {
    pub id: i64,
    /// Renaming keeps the slug unless `slug` asks otherwise.
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl TagCommandService {
    pub async fn update_tag(&self, command: UpdateTagCommand) -> ApplicationResult<TagDto> {
        let id = TagId::new(command.id)?;
        let name = command.name.as_deref().map(TagName::new).transpose()?;

        let updated = retry_on_conflict("update_tag", || {
            self.try_update(id, name.as_ref(), command.slug.clone())
        })
        .await?;

        tracing::info!(tag_id = updated.id.0, name = %updated.name, slug = %updated.slug, "updated tag");
        Ok(updated.into())
    }

    async fn try_update(
        &self,
        id: TagId,
        name: Option<&TagName>,
        slug: Option<String>,
    ) -> ApplicationResult<Tag> {
        let tag = self.load(id).await?;
        let mut update = TagUpdate::new(id);

        if let Some(name) = name.filter(|name| **name != tag.name) {
            self.ensure_name_free(name, Some(id)).await?;
            update = update.with_name(name.clone());
        }

        let source = name.unwrap_or(&tag.name);
        let change = SlugChange::from_request(slug);
        if let Some(slug) = apply_slug_change(
            &self.slug_service,
            self.tag_repo.as_ref(),
            &tag.slug,
            &change,
            source.as_str(),
        )
        .await?
        {
            update = update.with_slug(slug);
        }

        if update.name.is_none() && update.slug.is_none() {
            return Ok(tag);
        }
        Ok(self.tag_repo.update(update).await?)
    }
}
