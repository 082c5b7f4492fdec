// src/domain/slug/mod.rs
mod service;
mod value_objects;

pub use service::UniqueSlugService;
pub use value_objects::Slug;

use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Column every sluggable collection stores its slug in.
pub const SLUG_FIELD: &str = "slug";

/// A set of rows whose slugs must not collide.
#[async_trait]
pub trait SlugCollection: Send + Sync {
    /// Token used when the source text has no sluggable characters at all.
    fn default_slug(&self) -> &'static str;

    /// Whether any live row holds `value` in `field`.
    async fn exists(&self, field: &str, value: &str) -> DomainResult<bool>;
}
