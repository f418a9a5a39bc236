use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// JSON error envelope: a fixed top-level `message` plus an optional
/// `error` detail. Not-found responses carry no detail.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: &str, detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
            error: Some(detail.into()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into(), error: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.error {
            Some(err) => serde_json::json!({ "message": self.message, "error": err }),
            None => serde_json::json!({ "message": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
