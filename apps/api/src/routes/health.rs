use axum::Json;
use serde_json::{json, Value};

/// GET /
/// The literal welcome payload.
pub async fn welcome_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to AI Resume Builder API"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api"
    }))
}
