// All LLM prompt constants for the resume analysis flow.
// Inputs are truncated to the configured limits before templating.

use crate::config::{JOB_DESCRIPTION_LIMIT, RESUME_TEXT_LIMIT};
use crate::llm_client::prompts::truncate_chars;

/// A job description shorter than this is treated as absent.
const MIN_JD_CHARS: usize = 10;

pub const ANALYSIS_SYSTEM: &str = "You are an expert ATS analyst and resume reviewer. \
    Quote exact text from the resume when suggesting improvements. \
    Be specific about what to change, add, or remove — never give generic advice. \
    Always begin your response with the line '**ATS SCORE: X/100**'.";

/// Targeted analysis prompt. Replace `{resume_text}` and `{jd_text}` before sending.
const TARGETED_PROMPT_TEMPLATE: &str = r#"Analyze this resume against the job description and provide a detailed ATS assessment with SPECIFIC, ACTIONABLE improvements based on the EXACT content provided:

RESUME: {resume_text}

JOB DESCRIPTION: {jd_text}

Provide a comprehensive analysis:

**ATS SCORE: X/100**

**SKILLS MATCH ANALYSIS:**
- Technical skills alignment (be specific about technologies)
- Experience level match (junior/mid/senior requirements)
- Domain expertise relevance
- Missing critical skills and keywords

**EXPERIENCE EVALUATION:**
- Project complexity and relevance
- Professional experience alignment
- Education background fit
- Achievements and quantifiable results

**DETAILED IMPROVEMENT RECOMMENDATIONS:**
1. **MISSING KEYWORDS:** List 3-5 exact keywords from the job description missing from the resume
2. **QUANTIFY ACHIEVEMENTS:** Quote vague statements from the resume and suggest specific metrics
3. **STRENGTHEN EXPERIENCE:** Quote specific lines that need stronger action verbs
4. **FORMAT FIXES:** Name the sections that need ATS-friendly formatting
5. **SECTION IMPROVEMENTS:** Specific structural recommendations

**OVERALL ASSESSMENT:**
Brief summary of candidacy strength and key areas for improvement."#;

/// General analysis prompt (no job description). Replace `{resume_text}` before sending.
const GENERAL_PROMPT_TEMPLATE: &str = r#"Analyze this resume and provide a comprehensive ATS assessment with SPECIFIC improvements based on the EXACT content:

RESUME: {resume_text}

Quote actual text from this resume when making suggestions. Provide specific, actionable improvements rather than generic advice.

Provide detailed analysis:

**ATS SCORE: X/100**

**TECHNICAL SKILLS ANALYSIS:**
- Programming languages and frameworks identified
- Technical skill level assessment
- Missing in-demand technologies

**PROFESSIONAL EXPERIENCE REVIEW:**
- Work experience quality and relevance
- Quantifiable results and impact
- Career progression demonstration

**RESUME STRUCTURE & FORMATTING:**
- ATS-friendly formatting assessment
- Section organization and keyword placement

**DETAILED IMPROVEMENT PLAN:**
1. **ADD MISSING SKILLS:** Technologies the candidate likely knows but did not mention
2. **IMPROVE DESCRIPTIONS:** Quote weak descriptions and suggest rewrites
3. **QUANTIFY RESULTS:** Quote vague statements and suggest specific numbers
4. **KEYWORD OPTIMIZATION:** Industry terms to include for this field
5. **STRUCTURE FIXES:** Specific structural issues found

**OVERALL ASSESSMENT:**
Brief summary of strengths and priority fixes."#;

/// Builds the analysis prompt from resume text and an optional job description.
/// Chooses the targeted or general template; both inputs are truncated first.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    let resume_text = truncate_chars(resume_text, RESUME_TEXT_LIMIT);
    let jd = job_description.trim();

    if jd.len() > MIN_JD_CHARS {
        TARGETED_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{jd_text}", truncate_chars(jd, JOB_DESCRIPTION_LIMIT))
    } else {
        GENERAL_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targeted_prompt_used_with_job_description() {
        let prompt = build_analysis_prompt("resume body", "Senior Rust Engineer, 5+ years");
        assert!(prompt.contains("JOB DESCRIPTION: Senior Rust Engineer"));
        assert!(prompt.contains("RESUME: resume body"));
    }

    #[test]
    fn test_general_prompt_used_without_job_description() {
        let prompt = build_analysis_prompt("resume body", "");
        assert!(!prompt.contains("JOB DESCRIPTION:"));
        assert!(prompt.contains("DETAILED IMPROVEMENT PLAN"));
    }

    #[test]
    fn test_too_short_job_description_is_ignored() {
        let prompt = build_analysis_prompt("resume body", "rust");
        assert!(!prompt.contains("JOB DESCRIPTION:"));
    }

    #[test]
    fn test_resume_text_is_truncated() {
        let long_resume = "x".repeat(RESUME_TEXT_LIMIT + 500);
        let prompt = build_analysis_prompt(&long_resume, "");
        assert!(prompt.len() < long_resume.len() + GENERAL_PROMPT_TEMPLATE.len());
        assert!(!prompt.contains(&"x".repeat(RESUME_TEXT_LIMIT + 1)));
    }

    #[test]
    fn test_prompts_request_score_line() {
        assert!(build_analysis_prompt("r", "").contains("**ATS SCORE: X/100**"));
        assert!(
            build_analysis_prompt("r", "a long enough job description").contains("**ATS SCORE: X/100**")
        );
    }
}
