// src/application/commands/slugs.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::slug::{SLUG_FIELD, Slug, SlugCollection, UniqueSlugService};

/// What an update request asks for the slug of an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SlugChange {
    /// Field absent: the stored slug stays, even if the title changed.
    Keep,
    /// Empty string: derive a fresh slug from the current source text.
    Regenerate,
    /// Caller-chosen slug, normalized before use.
    Explicit(String),
}

impl SlugChange {
    pub(crate) fn from_request(raw: Option<String>) -> Self {
        match raw {
            None => Self::Keep,
            Some(value) if value.trim().is_empty() => Self::Regenerate,
            Some(value) => Self::Explicit(value),
        }
    }
}

/// Normalizes a caller-chosen slug and checks that nobody else holds it.
pub(crate) async fn claim_explicit_slug<C>(
    service: &UniqueSlugService,
    collection: &C,
    current: Option<&Slug>,
    raw: &str,
) -> ApplicationResult<Slug>
where
    C: SlugCollection + ?Sized,
{
    let base = service.base_slug(raw);
    if base.is_empty() {
        return Err(ApplicationError::validation(format!(
            "'{raw}' does not contain any characters usable in a slug"
        )));
    }
    if current.is_some_and(|slug| slug.as_str() == base) {
        return Ok(Slug::new(base)?);
    }
    if collection.exists(SLUG_FIELD, &base).await? {
        return Err(ApplicationError::conflict(format!(
            "slug '{base}' is already in use"
        )));
    }
    Ok(Slug::new(base)?)
}

/// New slug for an existing record, or `None` when it keeps the current one.
pub(crate) async fn apply_slug_change<C>(
    service: &UniqueSlugService,
    collection: &C,
    current: &Slug,
    change: &SlugChange,
    source_text: &str,
) -> ApplicationResult<Option<Slug>>
where
    C: SlugCollection + ?Sized,
{
    let next = match change {
        SlugChange::Keep => return Ok(None),
        SlugChange::Regenerate => {
            service
                .unique_slug_for(collection, SLUG_FIELD, source_text, Some(current))
                .await?
        }
        SlugChange::Explicit(raw) => {
            claim_explicit_slug(service, collection, Some(current), raw).await?
        }
    };

    Ok((&next != current).then_some(next))
}
