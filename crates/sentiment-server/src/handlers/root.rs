//! Liveness greeting.

use axum::Json;

/// Fixed greeting payload.
///
/// `GET /`
pub async fn read_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "Hello": "World" }))
}
