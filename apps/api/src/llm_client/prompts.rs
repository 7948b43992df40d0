// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Truncates `text` to at most `limit` characters, respecting char boundaries.
/// Prompt inputs are capped before templating to keep requests within budget.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_limit_is_unchanged() {
        assert_eq!(truncate_chars("resume text", 4000), "resume text");
    }

    #[test]
    fn test_truncate_cuts_at_limit() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_respects_multibyte_boundaries() {
        let text = "résumé";
        assert_eq!(truncate_chars(text, 4), "résu");
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_chars("", 10), "");
    }
}
