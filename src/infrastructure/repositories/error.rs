use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::SLUG_FIELD;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_POST_PUBLISHED_CHECK: &str = "posts_published_requires_timestamp_chk";
const CNT_TAG_SLUG: &str = "tags_slug_key";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_POST_TAG_TAG: &str = "post_tags_tag_id_fkey";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";
const CNT_COMMENT_PARENT: &str = "comments_parent_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::Conflict("post slug already exists".into()),
                    CNT_TAG_SLUG => DomainError::Conflict("tag slug already exists".into()),
                    CNT_TAG_NAME => DomainError::Conflict("tag name already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_POST_AUTHOR | CNT_COMMENT_AUTHOR => {
                        DomainError::NotFound("author not found".into())
                    }
                    CNT_COMMENT_POST => DomainError::NotFound("post not found".into()),
                    CNT_COMMENT_PARENT => DomainError::NotFound("parent comment not found".into()),
                    CNT_POST_TAG_TAG => DomainError::NotFound("tag not found".into()),
                    CNT_POST_PUBLISHED_CHECK => {
                        DomainError::Validation("published posts require published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Column a slug probe may look at. Field names end up in SQL text, so only
/// the known slug column is accepted.
pub(super) fn slug_column(field: &str) -> DomainResult<&'static str> {
    if field == SLUG_FIELD {
        Ok(SLUG_FIELD)
    } else {
        Err(DomainError::Validation(format!(
            "'{field}' is not a slug field"
        )))
    }
}
