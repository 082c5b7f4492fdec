// tests/e2e_http.rs
mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::{
    TestContext, UserBuilder, assert_error_response, empty_request, json_request, read_body,
    read_json,
};
use tower::ServiceExt;
use uuid::Uuid;

fn app_with_author() -> (TestContext, Uuid) {
    let author = UserBuilder::new("sol").password("old-password").build();
    let author_id = author.id.into();
    (TestContext::with_users(vec![author]), author_id)
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = TestContext::new().router();
    let resp = app
        .oneshot(empty_request(Method::GET, "/health"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await,
        json!({
            "error": false,
            "errorMessage": null,
            "code": 200,
            "body": { "status": "ok" },
            "metadata": null
        })
    );
}

#[tokio::test]
async fn create_post_returns_201_with_slug_and_tags() {
    let (ctx, author) = app_with_author();

    let req = json_request(
        Method::POST,
        "/api/v1/posts",
        json!({
            "title": "My First Post!",
            "body_markdown": "# Hello",
            "author_id": author,
            "tags": ["Rust", "rust "],
        }),
    );
    let resp = ctx.router().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = read_body(resp).await;
    assert_eq!(body["slug"], "my-first-post");
    assert_eq!(body["status"], "DRAFT");
    assert_eq!(body["tags"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["tags"][0]["name"], "rust");

    let by_slug = ctx
        .router()
        .oneshot(empty_request(Method::GET, "/api/v1/posts/by-slug/my-first-post"))
        .await
        .unwrap();
    assert_eq!(by_slug.status(), StatusCode::OK);
    assert_eq!(read_body(by_slug).await["id"], body["id"]);
}

#[tokio::test]
async fn missing_post_is_404() {
    let ctx = TestContext::new();
    let resp = ctx
        .router()
        .oneshot(empty_request(Method::GET, "/api/v1/posts/12345"))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn failure_envelope_carries_the_error_message() {
    let ctx = TestContext::new();
    let resp = ctx
        .router()
        .oneshot(empty_request(Method::GET, "/api/v1/posts/by-slug/nowhere"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let envelope = read_json(resp).await;
    assert_eq!(envelope["error"], true);
    assert_eq!(envelope["code"], 404);
    assert!(envelope["body"].is_null());
    assert_eq!(envelope["errorMessage"], "post not found");
}

#[tokio::test]
async fn blank_title_is_400() {
    let (ctx, author) = app_with_author();
    let req = json_request(
        Method::POST,
        "/api/v1/posts",
        json!({ "title": "  ", "body_markdown": "body", "author_id": author }),
    );
    let resp = ctx.router().oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn unknown_status_filter_is_400() {
    let ctx = TestContext::new();
    let resp = ctx
        .router()
        .oneshot(empty_request(Method::GET, "/api/v1/posts?status=archived"))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn post_list_filters_by_comma_separated_tags() {
    let (ctx, author) = app_with_author();
    for (title, tags) in [("Rusty", vec!["rust"]), ("Gopher", vec!["go"]), ("Plain", vec![])] {
        let req = json_request(
            Method::POST,
            "/api/v1/posts",
            json!({ "title": title, "body_markdown": "body", "author_id": author, "tags": tags }),
        );
        let resp = ctx.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ctx
        .router()
        .oneshot(empty_request(Method::GET, "/api/v1/posts?tags=Rust,%20go&limit=5"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page = read_body(resp).await;
    assert_eq!(page["limit"], 5);
    assert_eq!(page["items"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn tag_list_and_duplicate_tag_conflict() {
    let ctx = TestContext::new();

    let created = ctx
        .router()
        .oneshot(json_request(Method::POST, "/api/v1/tags", json!({ "name": "Rust" })))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let dup = ctx
        .router()
        .oneshot(json_request(Method::POST, "/api/v1/tags", json!({ "name": "rust" })))
        .await
        .unwrap();
    assert_error_response(dup, StatusCode::CONFLICT).await;

    let list = ctx
        .router()
        .oneshot(empty_request(Method::GET, "/api/v1/tags"))
        .await
        .unwrap();
    assert_eq!(list.status(), StatusCode::OK);
    let page = read_body(list).await;
    assert_eq!(page["items"], json!([{ "id": 1, "name": "rust", "slug": "rust" }]));
}

#[tokio::test]
async fn change_password_returns_204_and_checks_the_old_one() {
    let (ctx, user) = app_with_author();
    let uri = format!("/api/v1/users/{user}/change-password");

    let wrong = ctx
        .router()
        .oneshot(json_request(
            Method::POST,
            &uri,
            json!({ "current_password": "nope-nope", "new_password": "brand-new-pass" }),
        ))
        .await
        .unwrap();
    assert_error_response(wrong, StatusCode::UNAUTHORIZED).await;

    let ok = ctx
        .router()
        .oneshot(json_request(
            Method::POST,
            &uri,
            json!({ "current_password": "old-password", "new_password": "brand-new-pass" }),
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn deleted_comment_returns_404_afterwards() {
    let (ctx, author) = app_with_author();
    let post = ctx
        .router()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/posts",
            json!({ "title": "Thread", "body_markdown": "body", "author_id": author }),
        ))
        .await
        .unwrap();
    let post_id = read_body(post).await["id"].as_i64().unwrap();

    let created = ctx
        .router()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/comments",
            json!({ "post_id": post_id, "body": "hi" }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let comment_id = read_body(created).await["id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/comments/{comment_id}");

    let deleted = ctx
        .router()
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = ctx
        .router()
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_error_response(gone, StatusCode::NOT_FOUND).await;

    let listed = ctx
        .router()
        .oneshot(empty_request(
            Method::GET,
            &format!("/api/v1/posts/{post_id}/comments"),
        ))
        .await
        .unwrap();
    assert_eq!(read_body(listed).await["items"], json!([]));
}
