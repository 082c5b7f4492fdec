use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::slug::{Slug, SlugCollection};
use crate::domain::tag::entity::{NewTag, Tag, TagUpdate};
use crate::domain::tag::value_objects::{TagId, TagName};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: SlugCollection {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn update(&self, update: TagUpdate) -> DomainResult<Tag>;
    async fn delete(&self, id: TagId) -> DomainResult<()>;
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>>;
    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>>;
    /// Tags ordered by name.
    async fn list_page(&self, page: PageRequest) -> DomainResult<Vec<Tag>>;
}
