// src/domain/tag/services.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::slug::{SLUG_FIELD, UniqueSlugService};
use crate::domain::tag::entity::{NewTag, Tag};
use crate::domain::tag::repository::TagRepository;
use crate::domain::tag::value_objects::TagName;

/// Maps free-text tag names onto stored tags, creating the missing ones.
pub struct TagResolver {
    tag_repo: Arc<dyn TagRepository>,
    slug_service: Arc<UniqueSlugService>,
}

impl TagResolver {
    pub fn new(tag_repo: Arc<dyn TagRepository>, slug_service: Arc<UniqueSlugService>) -> Self {
        Self {
            tag_repo,
            slug_service,
        }
    }

    /// Returns one tag per input name, in input order. Names that normalize
    /// to the same value share a single stored tag. New tags are persisted
    /// immediately, before the caller writes anything that references them.
    pub async fn resolve_tags(&self, names: &[String]) -> DomainResult<Vec<Tag>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        // Reject the whole batch before touching storage.
        let normalized = names
            .iter()
            .map(TagName::new)
            .collect::<DomainResult<Vec<_>>>()?;

        let mut seen: HashMap<TagName, Tag> = HashMap::with_capacity(normalized.len());
        let mut resolved = Vec::with_capacity(normalized.len());

        for name in normalized {
            if let Some(tag) = seen.get(&name) {
                resolved.push(tag.clone());
                continue;
            }

            let tag = match self.tag_repo.find_by_name(&name).await? {
                Some(existing) => existing,
                None => self.create(name.clone()).await?,
            };

            seen.insert(name, tag.clone());
            resolved.push(tag);
        }

        Ok(resolved)
    }

    async fn create(&self, name: TagName) -> DomainResult<Tag> {
        let slug = self
            .slug_service
            .unique_slug(self.tag_repo.as_ref(), SLUG_FIELD, name.as_str())
            .await?;

        let tag = self.tag_repo.insert(NewTag { name, slug }).await?;
        tracing::info!(tag_id = tag.id.0, name = %tag.name, slug = %tag.slug, "created tag");
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::pagination::PageRequest;
    use crate::domain::slug::{Slug, SlugCollection};
    use crate::domain::tag::entity::TagUpdate;
    use crate::domain::tag::value_objects::TagId;
    use crate::infrastructure::util::DefaultSlugGenerator;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryTags {
        rows: Mutex<Vec<Tag>>,
    }

    #[async_trait]
    impl SlugCollection for MemoryTags {
        fn default_slug(&self) -> &'static str {
            "tag"
        }

        async fn exists(&self, _field: &str, value: &str) -> DomainResult<bool> {
            Ok(self.rows.lock().unwrap().iter().any(|t| t.slug.as_str() == value))
        }
    }

    #[async_trait]
    impl TagRepository for MemoryTags {
        async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
            let mut rows = self.rows.lock().unwrap();
            let created = Tag {
                id: TagId(rows.len() as i64 + 1),
                name: tag.name,
                slug: tag.slug,
            };
            rows.push(created.clone());
            Ok(created)
        }

        async fn update(&self, _update: TagUpdate) -> DomainResult<Tag> {
            Err(DomainError::NotFound("not implemented".into()))
        }

        async fn delete(&self, _id: TagId) -> DomainResult<()> {
            Ok(())
        }

        async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
            Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
        }

        async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
            Ok(self.rows.lock().unwrap().iter().find(|t| &t.slug == slug).cloned())
        }

        async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
            Ok(self.rows.lock().unwrap().iter().find(|t| &t.name == name).cloned())
        }

        async fn list_page(&self, _page: PageRequest) -> DomainResult<Vec<Tag>> {
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    fn resolver(repo: Arc<MemoryTags>) -> TagResolver {
        let slugs = Arc::new(UniqueSlugService::new(Arc::new(DefaultSlugGenerator)));
        TagResolver::new(repo, slugs)
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn empty_input_creates_nothing() {
        let repo = Arc::new(MemoryTags::default());
        let tags = resolver(Arc::clone(&repo)).resolve_tags(&[]).await.unwrap();
        assert!(tags.is_empty());
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn case_and_whitespace_variants_collapse_to_one_tag() {
        let repo = Arc::new(MemoryTags::default());
        let tags = resolver(Arc::clone(&repo))
            .resolve_tags(&names(&["Go", "go", " GO "]))
            .await
            .unwrap();

        assert_eq!(tags.len(), 3);
        assert!(tags.iter().all(|t| t.id == tags[0].id));
        assert_eq!(tags[0].name.as_str(), "go");

        let rows = repo.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].slug.as_str(), "go");
    }

    #[tokio::test]
    async fn existing_tag_is_reused_across_calls() {
        let repo = Arc::new(MemoryTags::default());
        let resolver = resolver(Arc::clone(&repo));

        let first = resolver.resolve_tags(&names(&["rust"])).await.unwrap();
        let second = resolver.resolve_tags(&names(&["rust"])).await.unwrap();

        assert_eq!(first[0].id, second[0].id);
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn result_order_follows_input() {
        let repo = Arc::new(MemoryTags::default());
        let tags = resolver(repo)
            .resolve_tags(&names(&["web", "Rust", "WEB"]))
            .await
            .unwrap();

        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["web", "rust", "web"]);
    }

    #[tokio::test]
    async fn blank_name_fails_before_anything_is_created() {
        let repo = Arc::new(MemoryTags::default());
        let err = resolver(Arc::clone(&repo))
            .resolve_tags(&names(&["rust", "   "]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.rows.lock().unwrap().is_empty());
    }
}
