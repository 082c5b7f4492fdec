// src/application/commands/tags/create.rs
use super::TagCommandService;
use crate::{
    application::{
        commands::{retry::retry_on_conflict, slugs::claim_explicit_slug},
        dto::TagDto,
        error::ApplicationResult,
    },
    domain::{
        slug::SLUG_FIELD,
        tag::{NewTag, Tag, TagName},
    },
};

pub struct CreateTagCommand {
    pub name: String,
    /// Caller-chosen slug; derived from the name when absent or blank.
    pub slug: Option<String>,
}

impl TagCommandService {
    pub async fn create_tag(&self, command: CreateTagCommand) -> ApplicationResult<TagDto> {
        let name = TagName::new(&command.name)?;
        let explicit = command
            .slug
            .as_deref()
            .filter(|slug| !slug.trim().is_empty());

        let created =
            retry_on_conflict("create_tag", || self.try_create(&name, explicit)).await?;

        tracing::info!(tag_id = created.id.0, name = %created.name, slug = %created.slug, "created tag");
        Ok(created.into())
    }

    async fn try_create(&self, name: &TagName, explicit: Option<&str>) -> ApplicationResult<Tag> {
        self.ensure_name_free(name, None).await?;

        let repo = self.tag_repo.as_ref();
        let slug = match explicit {
            Some(raw) => claim_explicit_slug(&self.slug_service, repo, None, raw).await?,
            None => {
                self.slug_service
                    .unique_slug(repo, SLUG_FIELD, name.as_str())
                    .await?
            }
        };

        let new_tag = NewTag {
            name: name.clone(),
            slug,
        };
        Ok(self.tag_repo.insert(new_tag).await?)
    }
}
