//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// Reports process liveness. No dependencies are touched.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
