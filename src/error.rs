use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Client-facing failure. The display string is exactly what the JSON error
/// body carries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required input.
    #[error("{0}")]
    BadRequest(&'static str),

    /// Referenced todo does not exist.
    #[error("Todo not found, enter the correct id!")]
    NotFound,

    /// A query or statement against the store failed.
    #[error("{0}")]
    Store(&'static str),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // not-found intentionally maps to 500, not 404
            ApiError::NotFound | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Failure inside the todo store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no todo with id {0}")]
    NotFound(String),

    #[error("invalid todo id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
