use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Envelope every JSON response is wrapped in, success or failure.
///
/// `body` carries the payload on success and is `null` on failure; `metadata`
/// is always `null` today.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub error: bool,
    pub error_message: Option<String>,
    pub code: u16,
    pub body: Option<T>,
    pub metadata: Option<()>,
}

impl<T> Envelope<T> {
    fn success(status: StatusCode, body: T) -> Self {
        Self {
            error: false,
            error_message: None,
            code: status.as_u16(),
            body: Some(body),
            metadata: None,
        }
    }
}

impl Envelope<()> {
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: true,
            error_message: Some(message.into()),
            code: status.as_u16(),
            body: None,
            metadata: None,
        }
    }
}

/// Successful handler output: a status plus the payload that goes in `body`.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    body: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(body: T) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn created(body: T) -> Self {
        Self::with_status(StatusCode::CREATED, body)
    }

    pub fn with_status(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::success(self.status, self.body))).into_response()
    }
}
