use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::EntityClass;

/// Failures a dispatch can surface. Parse misses are not errors (the parser
/// returns `None`); these are the not-found and transport outcomes the
/// capture entry point turns into user-facing text.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("couldn't find a {class} named \"{name}\"")]
    EntityNotFound { class: EntityClass, name: String },

    #[error("couldn't find a task matching \"{name}\"")]
    TaskNotFound { name: String },

    #[error("backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Transport-layer errors for the HTTP surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
