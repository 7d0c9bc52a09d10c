use axum::Json;
use chrono::Utc;
use serde_json::{Value, json};

/// GET /health -> liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
