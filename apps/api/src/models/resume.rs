use serde::{Deserialize, Serialize};

/// Structured resume fields submitted by the client.
/// Purely transient — constructed per request and discarded after the response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeInput {
    pub job_title: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub education: String,
    /// Accepted for forward compatibility with template-aware generation;
    /// not used when building the prompt.
    #[serde(default)]
    #[allow(dead_code)]
    pub template_id: Option<String>,
}

/// The three optimized sections extracted from the model's reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizedContent {
    pub experience: String,
    #[serde(rename = "suggestedSkills")]
    pub suggested_skills: Vec<String>,
    pub summary: String,
}

/// Outcome of a content-generation call.
/// Exactly one of `content` / `error` is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<OptimizedContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn ok(content: OptimizedContent) -> Self {
        Self {
            success: true,
            content: Some(content),
            error: None,
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(error.to_string()),
        }
    }
}

/// Outcome of a job-market analysis call.
/// Exactly one of `analysis` / `error` is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysisResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MarketAnalysisResult {
    pub fn ok(analysis: String) -> Self {
        Self {
            success: true,
            analysis: Some(analysis),
            error: None,
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self {
            success: false,
            analysis: None,
            error: Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_input_deserializes_without_template_id() {
        let json = r#"{
            "job_title": "Backend Engineer",
            "experience": "Built services.",
            "skills": ["Rust", "SQL"],
            "education": "BSc Computer Science"
        }"#;

        let input: ResumeInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.job_title, "Backend Engineer");
        assert_eq!(input.skills.len(), 2);
        assert!(input.template_id.is_none());
    }

    #[test]
    fn test_generation_result_ok_serializes_content_only() {
        let result = GenerationResult::ok(OptimizedContent {
            experience: "Led a team".to_string(),
            suggested_skills: vec!["Docker".to_string()],
            summary: "Seasoned engineer".to_string(),
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["content"]["suggestedSkills"][0], "Docker");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_generation_result_failure_serializes_error_only() {
        let result = GenerationResult::failure("quota exceeded");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "quota exceeded");
        assert!(json.get("content").is_none());
    }

    #[test]
    fn test_market_result_exactly_one_field_populated() {
        let ok = MarketAnalysisResult::ok("Fintech is hiring.".to_string());
        assert!(ok.success && ok.analysis.is_some() && ok.error.is_none());

        let failed = MarketAnalysisResult::failure("timeout");
        assert!(!failed.success && failed.analysis.is_none() && failed.error.is_some());
    }
}
