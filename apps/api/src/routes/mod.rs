pub mod health;
pub mod templates;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-content",
            post(handlers::handle_generate_content),
        )
        .route("/api/templates", get(templates::list_templates_handler))
        .route(
            "/api/analyze-job-market",
            post(handlers::handle_analyze_job_market),
        )
        .with_state(state)
}

/// CORS layer allowing exactly one origin. All methods and headers are
/// permitted from that origin; no allow headers are emitted for any other.
pub fn build_cors(allowed_origin: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .with_context(|| format!("ALLOWED_ORIGIN '{allowed_origin}' is not a valid origin"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
