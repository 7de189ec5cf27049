use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::services::capture::quick_capture;
use crate::state::AppState;

const MAX_CAPTURE_LEN: usize = 1000;

#[derive(Deserialize)]
pub struct CaptureRequest {
    pub text: String,
}

/// POST /api/capture — classify a free-text utterance and run the backend
/// calls it implies. Always answers valid input with 200 and a plain-text
/// message, even when the capture itself failed.
pub async fn capture(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CaptureRequest>,
) -> Result<String, AppError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidInput("text must not be empty".to_string()));
    }
    if text.len() > MAX_CAPTURE_LEN {
        return Err(AppError::InvalidInput(format!(
            "text must be at most {MAX_CAPTURE_LEN} characters"
        )));
    }

    tracing::info!(text = %text, "incoming capture");

    let today = Utc::now().date_naive();
    Ok(quick_capture(state.backend.as_ref(), text, today).await)
}
