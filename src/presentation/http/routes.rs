// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{comments, posts, tags, users};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{id}/change-password", post(users::change_password))
        .route("/users/{id}/posts", get(posts::list_posts_by_author))
        .route("/users/{id}/comments", get(comments::list_comments_by_user))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/by-slug/{slug}", get(posts::get_post_by_slug))
        .route(
            "/posts/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/posts/{id}/publish", post(posts::publish_post))
        .route("/posts/{id}/comments", get(comments::list_comments_by_post))
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/tags/by-slug/{slug}", get(tags::get_tag_by_slug))
        .route(
            "/tags/{id}",
            get(tags::get_tag)
                .patch(tags::update_tag)
                .delete(tags::delete_tag),
        )
        .route("/comments", post(comments::create_comment))
        .route(
            "/comments/{id}",
            get(comments::get_comment)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> ApiResponse<StatusResponse> {
    ApiResponse::ok(StatusResponse {
        status: "ok".into(),
    })
}
