use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error type for catalog API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// No catalog resource at the requested path.
    NotFound(String),
    /// The request named an unknown sort mode or playstyle key.
    BadRequest(String),
    /// The dataset failed to load at startup; carries the load failure
    /// reason reported until the process is restarted.
    DatasetUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DatasetUnavailable(reason) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("managers dataset unavailable: {}", reason),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;
