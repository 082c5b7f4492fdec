// src/presentation/http/controllers/comments.rs
use super::PageParams;
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, UpdateCommentCommand},
    dto::{CommentDto, OffsetPage},
    queries::comments::{GetCommentQuery, ListCommentsByPostQuery, ListCommentsByUserQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub post_id: i64,
    #[serde(default)]
    pub author_id: Option<Uuid>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub body: Option<String>,
    pub is_approved: Option<bool>,
}

pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<ApiResponse<CommentDto>> {
    let command = CreateCommentCommand {
        post_id: payload.post_id,
        author_id: payload.author_id,
        parent_id: payload.parent_id,
        body: payload.body,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok(ApiResponse::created(comment))
}

pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<ApiResponse<CommentDto>> {
    state
        .services
        .comment_queries
        .get_comment(GetCommentQuery { id })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn list_comments_by_post(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<ApiResponse<OffsetPage<CommentDto>>> {
    let query = ListCommentsByPostQuery {
        post_id,
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .comment_queries
        .list_comments_by_post(query)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn list_comments_by_user(
    Extension(state): Extension<HttpState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PageParams>,
) -> HttpResult<ApiResponse<OffsetPage<CommentDto>>> {
    let query = ListCommentsByUserQuery {
        user_id,
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .comment_queries
        .list_comments_by_user(query)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCommentRequest>,
) -> HttpResult<ApiResponse<CommentDto>> {
    let command = UpdateCommentCommand {
        id,
        body: payload.body,
        is_approved: payload.is_approved,
    };

    state
        .services
        .comment_commands
        .update_comment(command)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
