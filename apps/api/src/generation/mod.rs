// Content generation: prompt building, one LLM call per operation, and
// naive section parsing of the reply.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod handlers;
pub mod market;
pub mod optimizer;
pub mod prompts;
