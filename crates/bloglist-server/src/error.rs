use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bloglist_core::error::BlogError;
use thiserror::Error;

/// Errors surfaced to API clients, mapped onto HTTP status codes.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request payload failed validation (400).
    #[error("{0}")]
    Validation(String),

    /// No document exists with the requested id (404).
    #[error("Blog not found: {0}")]
    NotFound(String),

    /// Anything else, including persistence failures (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::MissingField(_) => ApiError::Validation(err.to_string()),
            BlogError::BlogNotFound(id) => ApiError::NotFound(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
