// src/domain/tag/entity.rs
use crate::domain::slug::Slug;
use crate::domain::tag::value_objects::{TagId, TagName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: TagName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct TagUpdate {
    pub id: TagId,
    pub name: Option<TagName>,
    pub slug: Option<Slug>,
}

impl TagUpdate {
    pub fn new(id: TagId) -> Self {
        Self {
            id,
            name: None,
            slug: None,
        }
    }

    pub fn with_name(mut self, name: TagName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }
}
