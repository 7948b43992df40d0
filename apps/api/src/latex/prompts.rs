// All LLM prompt constants for the LaTeX enhancement services.
// JSON-returning prompts reuse the shared JSON-only system prompt.

/// Resume improvement prompt gets at most this much LaTeX source.
pub const IMPROVE_LATEX_LIMIT: usize = 4000;
/// ATS check prompt gets at most this much LaTeX source.
pub const ATS_LATEX_LIMIT: usize = 3000;
/// Job descriptions are capped at this length in LaTeX-AI prompts.
pub const JD_LIMIT: usize = 1500;

pub const IMPROVE_SYSTEM: &str = "You are an expert resume writer and LaTeX professional. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Improvement prompt. Replace `{latex_code}` and `{jd_block}` before sending.
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"Analyze this LaTeX resume and provide suggestions for improvement.

LaTeX Resume:
{latex_code}
{jd_block}
Return a JSON object with this structure:
{
    "overall_score": number (0-100),
    "summary": "Brief overall assessment",
    "suggestions": [
        {
            "section": "Section name",
            "issue": "What's wrong",
            "improvement": "How to fix it",
            "priority": "high/medium/low"
        }
    ],
    "improved_sections": {
        "section_name": "Improved LaTeX code for that section"
    }
}

Return ONLY the JSON object."#;

/// Inserted into the improvement prompt when a job description is present.
/// Replace `{jd_text}`.
pub const IMPROVE_JD_BLOCK_TEMPLATE: &str = r#"
Target Job Description:
{jd_text}

Tailor your suggestions to make this resume more relevant for this specific role.
"#;

/// ATS compatibility prompt. Replace `{latex_code}`.
pub const ATS_CHECK_PROMPT_TEMPLATE: &str = r#"Analyze this LaTeX resume for ATS (Applicant Tracking System) compatibility.

LaTeX Resume:
{latex_code}

Return a JSON object with this structure:
{
    "ats_score": number (0-100),
    "issues": ["issue 1", "issue 2"],
    "recommendations": ["recommendation 1", "recommendation 2"],
    "keyword_analysis": {
        "found_keywords": ["keyword1", "keyword2"],
        "missing_keywords": ["keyword1", "keyword2"]
    }
}

Return ONLY the JSON object, no other text."#;

/// Bullet generation prompt. Replace `{role}`, `{company}`, `{responsibilities}`.
pub const BULLETS_PROMPT_TEMPLATE: &str = r#"Generate 3-5 impactful resume bullet points for the following role.
Use the XYZ formula: Accomplished [X] by [Y], resulting in [Z].
Include metrics and quantifiable results where possible.

Role: {role}
Company: {company}
Responsibilities: {responsibilities}

Return ONLY a JSON array of strings, no other text:
["Bullet point 1", "Bullet point 2"]"#;

/// Skill suggestion prompt. Replace `{current_skills}` and `{jd_text}`.
pub const SUGGEST_SKILLS_PROMPT_TEMPLATE: &str = r#"Based on this job description, suggest additional skills that should be added to the resume.
Only suggest skills that are commonly required for this type of role.
Do not suggest skills already listed.

Current skills: {current_skills}

Job Description:
{jd_text}

Return ONLY a JSON array of suggested skills:
["skill1", "skill2"]"#;

/// Section rewrite prompt. Replace `{section_name}` and `{section_content}`.
/// This one returns LaTeX, not JSON.
pub const IMPROVE_SECTION_SYSTEM: &str = "You are an expert resume writer and LaTeX professional. \
    Return ONLY improved LaTeX code, no explanations, no markdown fences.";

pub const IMPROVE_SECTION_PROMPT_TEMPLATE: &str = r#"Improve this resume {section_name} section for maximum impact.
Keep the LaTeX formatting intact.
Make it more professional, impactful, and ATS-friendly.
Use action verbs and quantify achievements where possible.

Current content:
{section_content}

Return ONLY the improved LaTeX code, no explanations."#;
