// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, username, password_hash, role, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(update: UserUpdate) -> QueryBuilder<'static, Postgres> {
        let UserUpdate {
            id,
            email,
            username,
            role,
            password_hash,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(email) = email {
            builder.push(", email = ");
            builder.push_bind(String::from(email));
        }

        if let Some(username) = username {
            builder.push(", username = ");
            builder.push_bind(String::from(username));
        }

        if let Some(role) = role {
            builder.push(", role = ");
            builder.push_bind(role.as_str());
        }

        if let Some(password_hash) = password_hash {
            builder.push(", password_hash = ");
            builder.push_bind(password_hash.as_str().to_owned());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING ");
        builder.push(USER_COLUMNS);

        builder
    }

    async fn find_one(&self, column: &'static str, value: &str) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    username: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::from(row.id),
            email: Email::new(row.email)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            id,
            email,
            username,
            password_hash,
            role,
            created_at,
        } = new_user;

        let sql = format!(
            "INSERT INTO users (id, email, username, password_hash, role, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {USER_COLUMNS}"
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(Uuid::from(id))
            .bind(email.as_str())
            .bind(username.as_str())
            .bind(password_hash.as_str())
            .bind(role.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut builder = Self::build_update_query(update);
        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        self.find_one("email", email.as_str()).await
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.find_one("username", username.as_str()).await
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
