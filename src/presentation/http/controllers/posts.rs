// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{
        CreatePostCommand, DeletePostCommand, PublishPostCommand, UpdatePostCommand,
    },
    dto::{OffsetPage, PostDto},
    queries::posts::{GetPostByIdQuery, GetPostBySlugQuery, ListPostsQuery},
};
use crate::domain::post::PostStatus;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct PostListParams {
    /// Comma separated tag names or slugs.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub author_id: Option<Uuid>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub body_markdown: String,
    #[serde(default)]
    pub rendered_html: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub is_private: bool,
    pub author_id: Uuid,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body_markdown: Option<String>,
    pub rendered_html: Option<String>,
    pub status: Option<PostStatus>,
    pub is_private: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostListParams {
    fn into_query(self, author_id: Option<Uuid>) -> HttpResult<ListPostsQuery> {
        let status = self
            .status
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::parse::<PostStatus>)
            .transpose()
            .map_err(|err| HttpError::bad_request(err.to_string()))?;

        let tags = self
            .tags
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ListPostsQuery {
            author_id: author_id.or(self.author_id),
            status,
            tags,
            limit: self.limit,
            offset: self.offset,
        })
    }
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<ApiResponse<PostDto>> {
    let command = CreatePostCommand::builder()
        .title(payload.title)
        .subtitle(payload.subtitle)
        .body(payload.body_markdown)
        .rendered_html(payload.rendered_html)
        .status(payload.status)
        .private(payload.is_private)
        .author(payload.author_id)
        .tags(payload.tags)
        .published_at(payload.published_at)
        .build()
        .map_err(HttpError::bad_request)?;

    let post = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;

    Ok(ApiResponse::created(post))
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<ApiResponse<OffsetPage<PostDto>>> {
    let query = params.into_query(None)?;
    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn list_posts_by_author(
    Extension(state): Extension<HttpState>,
    Path(author_id): Path<Uuid>,
    Query(params): Query<PostListParams>,
) -> HttpResult<ApiResponse<OffsetPage<PostDto>>> {
    let query = params.into_query(Some(author_id))?;
    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<ApiResponse<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<ApiResponse<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<ApiResponse<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        subtitle: payload.subtitle,
        body_markdown: payload.body_markdown,
        rendered_html: payload.rendered_html,
        status: payload.status,
        is_private: payload.is_private,
        published_at: payload.published_at,
        slug: payload.slug,
        tags: payload.tags,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn publish_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<ApiResponse<PostDto>> {
    state
        .services
        .post_commands
        .publish_post(PublishPostCommand { id })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
