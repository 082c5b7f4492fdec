use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostStatus};
use crate::domain::slug::{Slug, SlugCollection};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Listing criteria; an empty `tag_slugs` means no tag filtering.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub author_id: Option<UserId>,
    pub status: Option<PostStatus>,
    pub tag_slugs: Vec<String>,
    pub page: PageRequest,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: SlugCollection {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    /// Newest first; posts matching any of `tag_slugs` when it is non-empty.
    async fn list_page(&self, filter: PostFilter) -> DomainResult<Vec<Post>>;
}
