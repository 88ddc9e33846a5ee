use axum::Json;
use serde_json::{json, Value};

/// GET / when no static tree is configured.
pub async fn home() -> &'static str {
    "Quantum backend is alive."
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
