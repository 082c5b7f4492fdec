// tests/support/mocks/post_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use solblog::domain::errors::{DomainError, DomainResult};
use solblog::domain::post::{
    NewPost, Post, PostFilter, PostId, PostReadRepository, PostUpdate, PostWriteRepository,
};
use solblog::domain::slug::{SLUG_FIELD, Slug, SlugCollection};

/// One store behind both the read and the write port, so commands and queries
/// observe each other's effects.
#[derive(Default)]
pub struct InMemoryPosts {
    posts: Mutex<Vec<Post>>,
    injected_conflicts: AtomicU32,
    insert_attempts: AtomicU32,
}

impl InMemoryPosts {
    /// The next `count` inserts fail with a unique-key conflict, as if a
    /// concurrent writer had taken the slug between check and insert.
    pub fn fail_next_inserts(&self, count: u32) {
        self.injected_conflicts.store(count, Ordering::SeqCst);
    }

    pub fn insert_attempts(&self) -> u32 {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    pub fn all(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    fn take_injected_conflict(&self) -> bool {
        self.injected_conflicts
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl SlugCollection for InMemoryPosts {
    fn default_slug(&self) -> &'static str {
        "post"
    }

    async fn exists(&self, field: &str, value: &str) -> DomainResult<bool> {
        if field != SLUG_FIELD {
            return Err(DomainError::Validation(format!("'{field}' is not a slug field")));
        }
        Ok(self.posts.lock().unwrap().iter().any(|p| p.slug.as_str() == value))
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPosts {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        if self.take_injected_conflict() {
            return Err(DomainError::Conflict("post slug already exists".into()));
        }

        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(DomainError::Conflict("post slug already exists".into()));
        }
        let next_id = posts.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let created = Post {
            id: PostId(next_id),
            slug: post.slug,
            title: post.title,
            subtitle: post.subtitle,
            body_markdown: post.body_markdown,
            rendered_html: post.rendered_html,
            status: post.status,
            is_private: post.is_private,
            author_id: post.author_id,
            tags: post.tags,
            created_at: post.created_at,
            updated_at: post.updated_at,
            published_at: post.published_at,
        };
        posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(slug) = &update.slug {
            if posts.iter().any(|p| &p.slug == slug && p.id != update.id) {
                return Err(DomainError::Conflict("post slug already exists".into()));
            }
        }
        let post = posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(subtitle) = update.subtitle {
            post.subtitle = Some(subtitle).filter(|s| !s.is_empty());
        }
        if let Some(body) = update.body_markdown {
            post.body_markdown = body;
        }
        if let Some(html) = update.rendered_html {
            post.rendered_html = Some(html).filter(|s| !s.is_empty());
        }
        if let Some(status) = update.status {
            post.status = status;
        }
        if let Some(is_private) = update.is_private {
            post.is_private = is_private;
        }
        if let Some(published_at) = update.published_at {
            post.published_at = Some(published_at);
        }
        if let Some(tags) = update.tags {
            post.tags = tags;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPosts {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().iter().find(|p| &p.slug == slug).cloned())
    }

    async fn list_page(&self, filter: PostFilter) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .all()
            .into_iter()
            .filter(|p| filter.author_id.is_none_or(|a| p.author_id == a))
            .filter(|p| filter.status.is_none_or(|s| p.status == s))
            .filter(|p| {
                filter.tag_slugs.is_empty()
                    || p.tags
                        .iter()
                        .any(|t| filter.tag_slugs.iter().any(|s| s == t.slug.as_str()))
            })
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(posts
            .into_iter()
            .skip(filter.page.offset as usize)
            .take(filter.page.limit as usize)
            .collect())
    }
}
