//! Job market analysis — one call to the cheaper model, raw text returned verbatim.

use tracing::warn;

use crate::generation::prompts::{MARKET_PROMPT_TEMPLATE, MARKET_SYSTEM};
use crate::llm_client::{LlmClient, MARKET_MODEL};
use crate::models::resume::MarketAnalysisResult;

const MAX_TOKENS: u32 = 500;

/// Asks the model for market insight on the given skill list.
/// The reply is not parsed — it is passed through verbatim. Client failures
/// fold into a `success: false` result and never propagate.
pub async fn analyze_job_market(skills: &[String], llm: &LlmClient) -> MarketAnalysisResult {
    let prompt = MARKET_PROMPT_TEMPLATE.replace("{skills}", &skills.join(", "));

    match llm.chat(MARKET_MODEL, MARKET_SYSTEM, &prompt, MAX_TOKENS).await {
        Ok(text) => MarketAnalysisResult::ok(text),
        Err(e) => {
            warn!("job market analysis failed: {e}");
            MarketAnalysisResult::failure(e)
        }
    }
}
