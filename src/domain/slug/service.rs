// src/domain/slug/service.rs
use std::sync::Arc;

use super::{Slug, SlugCollection};
use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;

/// Domain service producing slugs that are unique within a collection.
pub struct UniqueSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl UniqueSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// URL-safe token for `text`, independent of any stored state.
    pub fn base_slug(&self, text: &str) -> String {
        self.generator.slugify(text)
    }

    /// Walks `base`, `base-2`, `base-3`, ... until `collection` reports the
    /// candidate as free in `field`. Nothing is written; the caller assigns
    /// the returned slug before persisting its record.
    pub async fn unique_slug<C>(
        &self,
        collection: &C,
        field: &str,
        text: &str,
    ) -> DomainResult<Slug>
    where
        C: SlugCollection + ?Sized,
    {
        self.unique_slug_for(collection, field, text, None).await
    }

    /// Like [`unique_slug`](Self::unique_slug), but `owned` (the slug the
    /// record being updated already holds) counts as free.
    pub async fn unique_slug_for<C>(
        &self,
        collection: &C,
        field: &str,
        text: &str,
        owned: Option<&Slug>,
    ) -> DomainResult<Slug>
    where
        C: SlugCollection + ?Sized,
    {
        let base = self.base_slug(text);
        let base = if base.is_empty() {
            collection.default_slug().to_string()
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            if owned.is_some_and(|slug| slug.as_str() == candidate) {
                break;
            }
            if !collection.exists(field, &candidate).await? {
                break;
            }
            tracing::debug!(field, candidate = %candidate, "slug already taken");
            counter += 1;
            candidate = format!("{base}-{counter}");
        }

        Slug::new(candidate)
    }
}
