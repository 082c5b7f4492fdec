// src/infrastructure/repositories/postgres_post.rs
use std::collections::HashMap;

use super::error::{map_sqlx, slug_column};
use super::postgres_tag::TagRow;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostBody, PostFilter, PostId, PostReadRepository, PostTitle, PostUpdate,
    PostWriteRepository,
};
use crate::domain::slug::{Slug, SlugCollection};
use crate::domain::tag::Tag;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgExecutor, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const POST_COLUMNS: &str = "id, slug, title, subtitle, body_markdown, rendered_html, status, \
     is_private, author_id, created_at, updated_at, published_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    slug: String,
    title: String,
    subtitle: Option<String>,
    body_markdown: String,
    rendered_html: Option<String>,
    status: String,
    is_private: bool,
    author_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
}

impl PostRow {
    fn into_post(self, tags: Vec<Tag>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::new(self.id)?,
            slug: Slug::new(self.slug)?,
            title: PostTitle::new(self.title)?,
            subtitle: self.subtitle,
            body_markdown: PostBody::new(self.body_markdown)?,
            rendered_html: self.rendered_html,
            status: self.status.parse()?,
            is_private: self.is_private,
            author_id: UserId::from(self.author_id),
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
            published_at: self.published_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: i64,
    #[sqlx(flatten)]
    tag: TagRow,
}

/// Tags of every post in `post_ids`, each list ordered by name.
async fn fetch_tags<'e, E>(executor: E, post_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Tag>>>
where
    E: PgExecutor<'e>,
{
    let mut tags: HashMap<i64, Vec<Tag>> = HashMap::new();
    if post_ids.is_empty() {
        return Ok(tags);
    }

    let rows = sqlx::query_as::<_, PostTagRow>(
        "SELECT pt.post_id, t.id, t.name, t.slug
         FROM post_tags pt
         JOIN tags t ON t.id = pt.tag_id
         WHERE pt.post_id = ANY($1)
         ORDER BY t.name, t.id",
    )
    .bind(post_ids.to_vec())
    .fetch_all(executor)
    .await
    .map_err(map_sqlx)?;

    for row in rows {
        tags.entry(row.post_id)
            .or_default()
            .push(Tag::try_from(row.tag)?);
    }
    Ok(tags)
}

async fn with_tags<'e, E>(executor: E, rows: Vec<PostRow>) -> DomainResult<Vec<Post>>
where
    E: PgExecutor<'e>,
{
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = fetch_tags(executor, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let post_tags = tags.remove(&row.id).unwrap_or_default();
            row.into_post(post_tags)
        })
        .collect()
}

/// Attaching an already attached tag is a no-op.
async fn attach_tags(conn: &mut PgConnection, post_id: i64, tags: &[Tag]) -> DomainResult<()> {
    if tags.is_empty() {
        return Ok(());
    }

    let tag_ids: Vec<i64> = tags.iter().map(|tag| i64::from(tag.id)).collect();
    sqlx::query(
        "INSERT INTO post_tags (post_id, tag_id)
         SELECT $1, UNNEST($2::BIGINT[])
         ON CONFLICT DO NOTHING",
    )
    .bind(post_id)
    .bind(tag_ids)
    .execute(conn)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

async fn load_one(conn: &mut PgConnection, row: PostRow) -> DomainResult<Post> {
    let mut posts = with_tags(conn, vec![row]).await?;
    posts
        .pop()
        .ok_or_else(|| DomainError::Persistence("post row vanished while loading tags".into()))
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            slug,
            title,
            subtitle,
            body_markdown,
            rendered_html,
            status,
            is_private,
            author_id,
            tags,
            created_at,
            updated_at,
            published_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO posts (slug, title, subtitle, body_markdown, rendered_html, status,
                                is_private, author_id, created_at, updated_at, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .bind(title.as_str())
            .bind(subtitle)
            .bind(body_markdown.as_str())
            .bind(rendered_html)
            .bind(status.as_str())
            .bind(is_private)
            .bind(Uuid::from(author_id))
            .bind(created_at)
            .bind(updated_at)
            .bind(published_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        attach_tags(&mut tx, row.id, &tags).await?;
        let created = load_one(&mut tx, row).await?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            slug,
            title,
            subtitle,
            body_markdown,
            rendered_html,
            status,
            is_private,
            published_at,
            tags,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(subtitle) = subtitle {
            builder.push(", subtitle = NULLIF(BTRIM(");
            builder.push_bind(subtitle);
            builder.push("), '')");
        }
        if let Some(body) = body_markdown {
            builder.push(", body_markdown = ");
            builder.push_bind(body.into_inner());
        }
        if let Some(html) = rendered_html {
            builder.push(", rendered_html = NULLIF(");
            builder.push_bind(html);
            builder.push(", '')");
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(is_private) = is_private {
            builder.push(", is_private = ");
            builder.push_bind(is_private);
        }
        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(tags) = tags {
            sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
                .bind(row.id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            attach_tags(&mut tx, row.id, &tags).await?;
        }

        let updated = load_one(&mut tx, row).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(updated)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

impl PostgresPostReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a PostFilter) {
        builder.push(" WHERE TRUE");

        if let Some(author_id) = filter.author_id {
            builder.push(" AND p.author_id = ");
            builder.push_bind(Uuid::from(author_id));
        }

        if let Some(status) = filter.status {
            builder.push(" AND p.status = ");
            builder.push_bind(status.as_str());
        }

        if !filter.tag_slugs.is_empty() {
            builder.push(
                " AND EXISTS (SELECT 1 FROM post_tags pt JOIN tags t ON t.id = pt.tag_id \
                 WHERE pt.post_id = p.id AND t.slug = ANY(",
            );
            builder.push_bind(filter.tag_slugs.clone());
            builder.push("))");
        }
    }
}

#[async_trait]
impl SlugCollection for PostgresPostReadRepository {
    fn default_slug(&self) -> &'static str {
        "post"
    }

    async fn exists(&self, field: &str, value: &str) -> DomainResult<bool> {
        let column = slug_column(field)?;
        let sql = format!("SELECT EXISTS (SELECT 1 FROM posts WHERE {column} = $1)");
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(with_tags(&self.pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(with_tags(&self.pool, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_page(&self, filter: PostFilter) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(POST_COLUMNS);
        builder.push(" FROM posts p");
        Self::apply_filter(&mut builder, &filter);
        builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(i64::from(filter.page.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(filter.page.offset));

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        with_tags(&self.pool, rows).await
    }
}
