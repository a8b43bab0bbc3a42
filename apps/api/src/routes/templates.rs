use axum::Json;
use serde_json::{json, Value};

use crate::models::template::TEMPLATES;

/// GET /api/templates
/// Returns the static template catalog.
pub async fn list_templates_handler() -> Json<Value> {
    Json(json!({ "templates": TEMPLATES }))
}
