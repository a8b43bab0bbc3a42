//! Resume content optimization — one LLM call, then positional section parsing.

use tracing::warn;

use crate::generation::prompts::{OPTIMIZE_PROMPT_TEMPLATE, OPTIMIZE_SYSTEM};
use crate::llm_client::{LlmClient, OPTIMIZE_MODEL};
use crate::models::resume::{GenerationResult, OptimizedContent, ResumeInput};

const MAX_TOKENS: u32 = 1000;

/// Builds the optimization prompt, issues a single chat-completion call, and
/// parses the reply into `OptimizedContent`.
///
/// Never propagates an error past this boundary: any client failure is folded
/// into a `success: false` result carrying the error's display text.
pub async fn generate_optimized_content(resume: &ResumeInput, llm: &LlmClient) -> GenerationResult {
    let prompt = build_prompt(resume);

    match llm.chat(OPTIMIZE_MODEL, OPTIMIZE_SYSTEM, &prompt, MAX_TOKENS).await {
        Ok(text) => GenerationResult::ok(parse_sections(&text)),
        Err(e) => {
            warn!("content generation failed: {e}");
            GenerationResult::failure(e)
        }
    }
}

fn build_prompt(resume: &ResumeInput) -> String {
    OPTIMIZE_PROMPT_TEMPLATE
        .replace("{job_title}", &resume.job_title)
        .replace("{experience}", &resume.experience)
        .replace("{skills}", &resume.skills.join(", "))
        .replace("{education}", &resume.education)
}

/// Splits the reply on blank-line boundaries and assigns chunks positionally:
/// first → experience, second (split on ", ") → suggested skills,
/// third → summary. Missing chunks default to empty string / empty list.
fn parse_sections(text: &str) -> OptimizedContent {
    let sections: Vec<&str> = text.split("\n\n").collect();

    OptimizedContent {
        experience: sections.first().map(|s| s.to_string()).unwrap_or_default(),
        suggested_skills: sections
            .get(1)
            .map(|s| s.split(", ").map(str::to_string).collect())
            .unwrap_or_default(),
        summary: sections.get(2).map(|s| s.to_string()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    fn sample_resume() -> ResumeInput {
        ResumeInput {
            job_title: "Backend Engineer".to_string(),
            experience: "Built and ran payment services.".to_string(),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string(), "AWS".to_string()],
            education: "BSc Computer Science".to_string(),
            template_id: None,
        }
    }

    #[test]
    fn test_prompt_embeds_all_resume_fields() {
        let prompt = build_prompt(&sample_resume());
        assert!(prompt.contains("Job Title: Backend Engineer"));
        assert!(prompt.contains("Built and ran payment services."));
        assert!(prompt.contains("Rust, PostgreSQL, AWS"));
        assert!(prompt.contains("BSc Computer Science"));
        assert!(!prompt.contains("{job_title}"));
        assert!(!prompt.contains("{skills}"));
    }

    #[test]
    fn test_three_chunks_map_positionally() {
        let reply = "Led migration of billing to Rust, cutting p99 latency 40%.\n\n\
                     Kubernetes, Terraform, gRPC\n\n\
                     Backend engineer with eight years of payments experience.";

        let content = parse_sections(reply);
        assert_eq!(
            content.experience,
            "Led migration of billing to Rust, cutting p99 latency 40%."
        );
        assert_eq!(
            content.suggested_skills,
            vec!["Kubernetes", "Terraform", "gRPC"]
        );
        assert_eq!(
            content.summary,
            "Backend engineer with eight years of payments experience."
        );
    }

    #[test]
    fn test_two_chunks_default_summary_to_empty() {
        let content = parse_sections("Experience text.\n\nDocker, Helm");
        assert_eq!(content.experience, "Experience text.");
        assert_eq!(content.suggested_skills, vec!["Docker", "Helm"]);
        assert_eq!(content.summary, "");
    }

    #[test]
    fn test_one_chunk_defaults_skills_and_summary() {
        let content = parse_sections("Only an experience section.");
        assert_eq!(content.experience, "Only an experience section.");
        assert!(content.suggested_skills.is_empty());
        assert_eq!(content.summary, "");
    }

    #[test]
    fn test_extra_chunks_beyond_third_are_ignored() {
        let content = parse_sections("exp\n\na, b\n\nsummary\n\ntrailing notes");
        assert_eq!(content.experience, "exp");
        assert_eq!(content.suggested_skills, vec!["a", "b"]);
        assert_eq!(content.summary, "summary");
    }

    #[test]
    fn test_single_skill_chunk_yields_one_entry() {
        let content = parse_sections("exp\n\nKubernetes\n\nsummary");
        assert_eq!(content.suggested_skills, vec!["Kubernetes"]);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_failure_result() {
        // Port 1 refuses the connection, so the single attempt errors fast.
        let llm = LlmClient::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:1/v1/chat/completions".to_string(),
        );

        let result = generate_optimized_content(&sample_resume(), &llm).await;
        assert!(!result.success);
        assert!(result.content.is_none());
        assert!(!result.error.unwrap().is_empty());
    }

    #[test]
    fn test_client_error_folds_into_failure_result() {
        let error = LlmError::Api {
            status: 429,
            message: "You exceeded your current quota".to_string(),
        };

        let result = GenerationResult::failure(error);
        assert!(!result.success);
        assert!(result.content.is_none());
        let message = result.error.unwrap();
        assert!(!message.is_empty());
        assert!(message.contains("quota"));
    }
}
