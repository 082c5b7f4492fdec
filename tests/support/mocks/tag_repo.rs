// tests/support/mocks/tag_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use solblog::domain::errors::{DomainError, DomainResult};
use solblog::domain::pagination::PageRequest;
use solblog::domain::slug::{SLUG_FIELD, Slug, SlugCollection};
use solblog::domain::tag::{NewTag, Tag, TagId, TagName, TagRepository, TagUpdate};

#[derive(Default)]
pub struct InMemoryTags {
    tags: Mutex<Vec<Tag>>,
    concurrent_writer: AtomicBool,
}

impl InMemoryTags {
    /// The next insert loses a race: a competing writer stores a tag with
    /// the same name first, and the insert hits the unique name constraint.
    pub fn lose_next_insert_race(&self) {
        self.concurrent_writer.store(true, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Tag> {
        self.tags.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugCollection for InMemoryTags {
    fn default_slug(&self) -> &'static str {
        "tag"
    }

    async fn exists(&self, field: &str, value: &str) -> DomainResult<bool> {
        if field != SLUG_FIELD {
            return Err(DomainError::Validation(format!("'{field}' is not a slug field")));
        }
        Ok(self.tags.lock().unwrap().iter().any(|t| t.slug.as_str() == value))
    }
}

#[async_trait]
impl TagRepository for InMemoryTags {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut tags = self.tags.lock().unwrap();
        if self.concurrent_writer.swap(false, Ordering::SeqCst) {
            let next_id = tags.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
            tags.push(Tag {
                id: TagId(next_id),
                name: tag.name.clone(),
                slug: tag.slug.clone(),
            });
        }
        if tags.iter().any(|t| t.name == tag.name) {
            return Err(DomainError::Conflict("tag name already exists".into()));
        }
        if tags.iter().any(|t| t.slug == tag.slug) {
            return Err(DomainError::Conflict("tag slug already exists".into()));
        }
        let next_id = tags.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;
        let created = Tag {
            id: TagId(next_id),
            name: tag.name,
            slug: tag.slug,
        };
        tags.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<Tag> {
        let mut tags = self.tags.lock().unwrap();
        let tag = tags
            .iter_mut()
            .find(|t| t.id == update.id)
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;
        if let Some(name) = update.name {
            tag.name = name;
        }
        if let Some(slug) = update.slug {
            tag.slug = slug;
        }
        Ok(tag.clone())
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let mut tags = self.tags.lock().unwrap();
        let before = tags.len();
        tags.retain(|t| t.id != id);
        if tags.len() == before {
            return Err(DomainError::NotFound("tag not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        Ok(self.tags.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        Ok(self.tags.lock().unwrap().iter().find(|t| &t.slug == slug).cloned())
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        Ok(self.tags.lock().unwrap().iter().find(|t| &t.name == name).cloned())
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Vec<Tag>> {
        let mut tags = self.all();
        tags.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(tags
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect())
    }
}
