// src/infrastructure/repositories/postgres_tag.rs
use super::error::{map_sqlx, slug_column};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::slug::{Slug, SlugCollection};
use crate::domain::tag::{NewTag, Tag, TagId, TagName, TagRepository, TagUpdate};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct TagRow {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) slug: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl SlugCollection for PostgresTagRepository {
    fn default_slug(&self) -> &'static str {
        "tag"
    }

    async fn exists(&self, field: &str, value: &str) -> DomainResult<bool> {
        let column = slug_column(field)?;
        let sql = format!("SELECT EXISTS (SELECT 1 FROM tags WHERE {column} = $1)");
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let row = sqlx::query_as::<_, TagRow>(
            "INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING id, name, slug",
        )
        .bind(tag.name.as_str())
        .bind(tag.slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Tag::try_from(row)
    }

    async fn update(&self, update: TagUpdate) -> DomainResult<Tag> {
        let TagUpdate { id, name, slug } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE tags SET id = id");
        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, name, slug");

        let row = builder
            .build_query_as::<TagRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("tag not found".into()))?;

        Tag::try_from(row)
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("tag not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name, slug FROM tags WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name, slug FROM tags WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>("SELECT id, name, slug FROM tags WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT id, name, slug FROM tags ORDER BY name, id LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }
}
