//! Axum route handlers for the generation API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::market::analyze_job_market;
use crate::generation::optimizer::generate_optimized_content;
use crate::models::resume::{GenerationResult, MarketAnalysisResult, ResumeInput};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MarketAnalysisRequest {
    pub skills: Vec<String>,
}

/// POST /api/generate-content
///
/// Forwards the resume fields to the optimization helper and returns its
/// result body with status 200. Helper failures arrive as `success: false`
/// inside the body rather than as an error status.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(request): Json<ResumeInput>,
) -> Result<Json<GenerationResult>, AppError> {
    let result = generate_optimized_content(&request, &state.llm).await;
    Ok(Json(result))
}

/// POST /api/analyze-job-market
///
/// Returns the model's market commentary for a skill list, verbatim.
pub async fn handle_analyze_job_market(
    State(state): State<AppState>,
    Json(request): Json<MarketAnalysisRequest>,
) -> Result<Json<MarketAnalysisResult>, AppError> {
    let result = analyze_job_market(&request.skills, &state.llm).await;
    Ok(Json(result))
}
