//! Sentiment classification handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::analyze::AnalyzeRequest;
use crate::state::AppState;

/// Classifies the request text and returns the top label as a JSON string.
///
/// `POST /analyze`
///
/// Inference is CPU-bound, so it runs on the blocking pool.
pub async fn analyze_text(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<String>, ApiError> {
    let Json(req) = payload?;

    let classifier = Arc::clone(&state.classifier);
    let prediction = tokio::task::spawn_blocking(move || classifier.classify(&req.text)).await??;

    tracing::debug!(
        label = %prediction.label,
        score = prediction.score,
        "classified text"
    );

    Ok(Json(prediction.label))
}
