// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentRepository, CommentUpdate, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const COMMENT_COLUMNS: &str =
    "id, post_id, author_id, parent_id, body, is_approved, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: Uuid,
    post_id: i64,
    author_id: Option<Uuid>,
    parent_id: Option<Uuid>,
    body: String,
    is_approved: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::from(row.id),
            post_id: PostId::new(row.post_id)?,
            author_id: row.author_id.map(UserId::from),
            parent_id: row.parent_id.map(CommentId::from),
            body: CommentBody::new(row.body)?,
            is_approved: row.is_approved,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            id,
            post_id,
            author_id,
            parent_id,
            body,
            created_at,
        } = comment;

        let sql = format!(
            "INSERT INTO comments (id, post_id, author_id, parent_id, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(Uuid::from(id))
            .bind(i64::from(post_id))
            .bind(author_id.map(Uuid::from))
            .bind(parent_id.map(Uuid::from))
            .bind(body.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let CommentUpdate {
            id,
            body,
            is_approved,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE comments SET updated_at = ");
        builder.push_bind(updated_at);
        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }
        if let Some(is_approved) = is_approved {
            builder.push(", is_approved = ");
            builder.push_bind(is_approved);
        }
        builder.push(" WHERE deleted_at IS NULL AND id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING ");
        builder.push(COMMENT_COLUMNS);

        let row = builder
            .build_query_as::<CommentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn soft_delete(&self, id: CommentId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE comments SET deleted_at = $2, updated_at = $2
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(Uuid::from(id))
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let sql =
            format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1 AND deleted_at IS NULL");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_by_post(&self, post_id: PostId, page: PageRequest) -> DomainResult<Vec<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE post_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(post_id))
            .bind(i64::from(page.limit))
            .bind(i64::from(page.offset))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn list_by_author(
        &self,
        author_id: UserId,
        page: PageRequest,
    ) -> DomainResult<Vec<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE author_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(Uuid::from(author_id))
            .bind(i64::from(page.limit))
            .bind(i64::from(page.offset))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
