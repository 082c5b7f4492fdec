// src/presentation/http/controllers/tags.rs
use super::PageParams;
use crate::application::{
    commands::tags::{CreateTagCommand, DeleteTagCommand, UpdateTagCommand},
    dto::{OffsetPage, TagDto},
    queries::tags::{GetTagByIdQuery, GetTagBySlugQuery, ListTagsQuery},
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

#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTagRequest {
    pub name: Option<String>,
    /// `""` regenerates the slug from the name.
    pub slug: Option<String>,
}

pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateTagRequest>,
) -> HttpResult<ApiResponse<TagDto>> {
    let command = CreateTagCommand {
        name: payload.name,
        slug: payload.slug,
    };

    let tag = state
        .services
        .tag_commands
        .create_tag(command)
        .await
        .into_http()?;

    Ok(ApiResponse::created(tag))
}

pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<ApiResponse<OffsetPage<TagDto>>> {
    let query = ListTagsQuery {
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .tag_queries
        .list_tags(query)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn get_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<ApiResponse<TagDto>> {
    state
        .services
        .tag_queries
        .get_tag_by_id(GetTagByIdQuery { id })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn get_tag_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<ApiResponse<TagDto>> {
    state
        .services
        .tag_queries
        .get_tag_by_slug(GetTagBySlugQuery { slug })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn update_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTagRequest>,
) -> HttpResult<ApiResponse<TagDto>> {
    let command = UpdateTagCommand {
        id,
        name: payload.name,
        slug: payload.slug,
    };

    state
        .services
        .tag_commands
        .update_tag(command)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .tag_commands
        .delete_tag(DeleteTagCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
