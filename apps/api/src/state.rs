use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The LLM client is constructed once at startup and cloned into handlers —
/// there is no process-wide mutable client state.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
