use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required query parameter was absent or empty. Carries the message shown to the caller.
    #[error("{0}")]
    MissingParameter(&'static str),

    #[error("{0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingParameter(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_parameter_renders_error_body() {
        let response = AppError::MissingParameter("Product name is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"error":"Product name is required"}"#);
    }

    #[test]
    fn bad_request_displays_message() {
        let err = AppError::BadRequest("query must be text".to_string());
        assert_eq!(err.to_string(), "query must be text");
    }
}
