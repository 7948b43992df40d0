//! AI-powered LaTeX resume enhancement: improvement suggestions, ATS
//! compatibility checks, bullet generation, skill suggestions, and
//! single-section rewrites.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::latex::prompts::{
    ATS_CHECK_PROMPT_TEMPLATE, ATS_LATEX_LIMIT, BULLETS_PROMPT_TEMPLATE, IMPROVE_JD_BLOCK_TEMPLATE,
    IMPROVE_LATEX_LIMIT, IMPROVE_PROMPT_TEMPLATE, IMPROVE_SECTION_PROMPT_TEMPLATE,
    IMPROVE_SECTION_SYSTEM, IMPROVE_SYSTEM, JD_LIMIT, SUGGEST_SKILLS_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{truncate_chars, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Suggestion priority as emitted by the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One improvement suggestion for a resume section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub section: String,
    pub issue: String,
    pub improvement: String,
    pub priority: Priority,
}

/// Full AI improvement result for a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiImproveResult {
    pub overall_score: Option<u32>,
    pub summary: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub improved_sections: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeywordAnalysis {
    #[serde(default)]
    pub found_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
}

/// ATS compatibility report for a LaTeX resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsCheckResult {
    pub ats_score: Option<u32>,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub keyword_analysis: KeywordAnalysis,
}

/// Suggests improvements to a LaTeX resume, optionally tailored to a job
/// description.
pub async fn improve_resume(
    llm: &LlmClient,
    latex_code: &str,
    job_description: &str,
) -> Result<AiImproveResult, LlmError> {
    let jd = job_description.trim();
    let jd_block = if jd.is_empty() {
        String::new()
    } else {
        IMPROVE_JD_BLOCK_TEMPLATE.replace("{jd_text}", truncate_chars(jd, JD_LIMIT))
    };

    let prompt = IMPROVE_PROMPT_TEMPLATE
        .replace("{latex_code}", truncate_chars(latex_code, IMPROVE_LATEX_LIMIT))
        .replace("{jd_block}", &jd_block);

    llm.call_json::<AiImproveResult>(&prompt, IMPROVE_SYSTEM).await
}

/// Checks a LaTeX resume for ATS compatibility.
pub async fn check_ats_compatibility(
    llm: &LlmClient,
    latex_code: &str,
) -> Result<AtsCheckResult, LlmError> {
    let prompt = ATS_CHECK_PROMPT_TEMPLATE
        .replace("{latex_code}", truncate_chars(latex_code, ATS_LATEX_LIMIT));

    llm.call_json::<AtsCheckResult>(&prompt, JSON_ONLY_SYSTEM).await
}

/// Generates 3-5 impactful bullet points for a work experience entry.
pub async fn generate_bullet_points(
    llm: &LlmClient,
    role: &str,
    company: &str,
    responsibilities: &str,
) -> Result<Vec<String>, LlmError> {
    let prompt = BULLETS_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{company}", company)
        .replace("{responsibilities}", responsibilities);

    llm.call_json::<Vec<String>>(&prompt, JSON_ONLY_SYSTEM).await
}

/// Suggests additional skills based on a job description, excluding skills
/// already listed.
pub async fn suggest_skills(
    llm: &LlmClient,
    current_skills: &[String],
    job_description: &str,
) -> Result<Vec<String>, LlmError> {
    let prompt = SUGGEST_SKILLS_PROMPT_TEMPLATE
        .replace("{current_skills}", &current_skills.join(", "))
        .replace("{jd_text}", truncate_chars(job_description, JD_LIMIT));

    llm.call_json::<Vec<String>>(&prompt, JSON_ONLY_SYSTEM).await
}

/// Rewrites a single resume section, returning improved LaTeX.
pub async fn improve_section(
    llm: &LlmClient,
    section_name: &str,
    section_content: &str,
) -> Result<String, LlmError> {
    let prompt = IMPROVE_SECTION_PROMPT_TEMPLATE
        .replace("{section_name}", section_name)
        .replace("{section_content}", section_content);

    llm.call_text(&prompt, IMPROVE_SECTION_SYSTEM).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improve_result_deserializes_full_payload() {
        let json = r#"{
            "overall_score": 74,
            "summary": "Solid resume with weak quantification.",
            "suggestions": [
                {
                    "section": "Experience",
                    "issue": "No metrics",
                    "improvement": "Add percentages",
                    "priority": "high"
                }
            ],
            "improved_sections": {
                "Experience": "\\section{Experience} Improved content"
            }
        }"#;
        let result: AiImproveResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.overall_score, Some(74));
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].priority, Priority::High);
        assert!(result.improved_sections.contains_key("Experience"));
    }

    #[test]
    fn test_improve_result_tolerates_missing_fields() {
        let result: AiImproveResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.overall_score, None);
        assert!(result.suggestions.is_empty());
        assert!(result.improved_sections.is_empty());
    }

    #[test]
    fn test_ats_result_deserializes() {
        let json = r#"{
            "ats_score": 81,
            "issues": ["Tables confuse parsers"],
            "recommendations": ["Use plain itemize lists"],
            "keyword_analysis": {
                "found_keywords": ["Rust", "PostgreSQL"],
                "missing_keywords": ["Kubernetes"]
            }
        }"#;
        let result: AtsCheckResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.ats_score, Some(81));
        assert_eq!(result.keyword_analysis.missing_keywords, vec!["Kubernetes"]);
    }

    #[test]
    fn test_ats_result_tolerates_sparse_payload() {
        let result: AtsCheckResult =
            serde_json::from_str(r#"{"ats_score": null, "issues": []}"#).unwrap();
        assert_eq!(result.ats_score, None);
        assert!(result.keyword_analysis.found_keywords.is_empty());
    }

    #[test]
    fn test_priority_rejects_unknown_value() {
        assert!(serde_json::from_str::<Priority>(r#""urgent""#).is_err());
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), r#""medium""#);
    }
}
