// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{
    DummyClock, InMemoryComments, InMemoryPosts, InMemoryTags, InMemoryUsers, PlainPasswordHasher,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use solblog::application::services::ApplicationServices;
use solblog::domain::user::User;
use solblog::infrastructure::util::DefaultSlugGenerator;
use solblog::presentation::http::routes::build_router;
use solblog::presentation::http::state::HttpState;

/// Services wired to in-memory stores; the stores stay reachable so tests
/// can seed them and inspect what was written.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub users: Arc<InMemoryUsers>,
    pub posts: Arc<InMemoryPosts>,
    pub tags: Arc<InMemoryTags>,
    pub comments: Arc<InMemoryComments>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let users = Arc::new(InMemoryUsers::with(users));
        let posts = Arc::new(InMemoryPosts::default());
        let tags = Arc::new(InMemoryTags::default());
        let comments = Arc::new(InMemoryComments::default());

        let services = Arc::new(ApplicationServices::new(
            users.clone(),
            posts.clone(),
            posts.clone(),
            tags.clone(),
            comments.clone(),
            Arc::new(PlainPasswordHasher),
            Arc::new(DummyClock),
            Arc::new(DefaultSlugGenerator),
        ));

        Self {
            services,
            users,
            posts,
            tags,
            comments,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["*".to_string()])
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Read a success envelope and return its `body`.
pub async fn read_body(resp: axum::response::Response) -> Value {
    let status = resp.status();
    let mut envelope = read_json(resp).await;
    assert_eq!(envelope["error"], false, "unexpected failure envelope: {envelope}");
    assert!(envelope["errorMessage"].is_null());
    assert_eq!(envelope["code"], status.as_u16());
    assert!(envelope["metadata"].is_null());
    envelope["body"].take()
}

/// Assert that a response is a failure envelope carrying the expected status.
pub async fn assert_error_response(resp: axum::response::Response, expected_status: StatusCode) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    assert_eq!(json["error"], true, "unexpected error field: {}", json["error"]);
    assert_eq!(json["code"], expected_status.as_u16());
    assert!(json["body"].is_null());
    assert!(json["metadata"].is_null());
    let msg_field = json["errorMessage"].as_str().unwrap_or("");
    assert!(!msg_field.is_empty(), "expected non-empty errorMessage field");
}
