//! Response Interpreter — splits the AI's free-text analysis into renderable
//! fragments and a structured result, without assuming a strict grammar.
//!
//! The model's output format is not contractually guaranteed, so every
//! function here is total: malformed input degrades to plain paragraphs,
//! never an error.

use serde::Serialize;

/// Score-label variants accepted by `extract_score`, tried in order.
/// Matching is case-insensitive; the label must be followed by `<int>/100`.
const SCORE_LABELS: &[&str] = &[
    "ats compatibility score",
    "ats score",
    "overall score",
    "score",
];

/// Lines that mark the start of the improvement section. The separator token
/// `---` also triggers the split. Substring match is case-sensitive: the
/// prompts ask for these headings verbatim in upper case.
const IMPROVEMENT_TRIGGERS: &[&str] = &[
    "DETAILED IMPROVEMENT",
    "IMPROVEMENT RECOMMENDATIONS",
    "IMPROVEMENT PLAN",
    "ATS OPTIMIZATION",
];

const SEPARATOR: &str = "---";

/// A classified unit of AI response text, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    Header { text: String },
    Bullet { text: String },
    NumberedItem { index: u32, text: String },
    Plain { text: String },
    Blank,
}

/// Structured interpretation of one analysis response.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    /// Parsed from the first `<label>: <int>/100` line, if any.
    /// Out-of-range values pass through unvalidated.
    pub ats_score: Option<i64>,
    pub fit_analysis: String,
    pub improvement_tips: Vec<String>,
}

/// Scans for the first line containing a score label followed by `<int>/100`
/// and returns that integer. Returns `None` when no such line exists.
///
/// The integer is NOT clamped to [0, 100] — out-of-range values from the
/// model are passed through as-is.
pub fn extract_score(text: &str) -> Option<i64> {
    for line in text.lines() {
        let lower = line.to_lowercase();
        for label in SCORE_LABELS {
            if let Some(pos) = lower.find(label) {
                if let Some(score) = parse_score_after(&lower[pos + label.len()..]) {
                    return Some(score);
                }
            }
        }
    }
    None
}

/// Parses `[:* ]* <int> / 100` from the text following a score label.
fn parse_score_after(rest: &str) -> Option<i64> {
    let rest = rest.trim_start_matches(|c: char| c == ':' || c == '*' || c.is_whitespace());

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let after = rest[digits.len()..].trim_start();
    let after = after.strip_prefix('/')?;
    let after = after.trim_start();
    if !after.starts_with("100") {
        return None;
    }

    digits.parse::<i64>().ok()
}

/// Splits the response into (analysis, improvement) on the first trigger line.
/// The trigger line itself belongs to the improvement part. With no trigger,
/// the whole text is analysis and the improvement part is empty.
///
/// Total over the line set: every input line lands in exactly one part.
pub fn split_into_analysis_and_improvement(text: &str) -> (String, String) {
    let lines: Vec<&str> = text.lines().collect();

    let trigger_idx = lines.iter().position(|line| {
        line.trim() == SEPARATOR || IMPROVEMENT_TRIGGERS.iter().any(|t| line.contains(t))
    });

    match trigger_idx {
        Some(idx) => (lines[..idx].join("\n"), lines[idx..].join("\n")),
        None => (text.to_string(), String::new()),
    }
}

/// Classifies a single line. Pure function: the same input always yields the
/// same fragment. Markers and literal `**` emphasis are stripped from the
/// returned content.
pub fn classify_line(line: &str) -> Fragment {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Fragment::Blank;
    }

    // `## Heading` style
    if let Some(rest) = trimmed.strip_prefix("##") {
        let text = strip_emphasis(rest.trim_start_matches('#').trim());
        return Fragment::Header {
            text: text.trim_end_matches(':').trim().to_string(),
        };
    }

    // `**Heading:**` style
    if trimmed.starts_with("**") && trimmed.len() > 4 {
        let inner = strip_emphasis(trimmed);
        if inner.ends_with(':') && !inner.is_empty() {
            return Fragment::Header {
                text: inner.trim_end_matches(':').trim().to_string(),
            };
        }
    }

    // `* bullet` / `- bullet`
    if (trimmed.starts_with('*') || trimmed.starts_with('-'))
        && trimmed[1..].starts_with(char::is_whitespace)
    {
        return Fragment::Bullet {
            text: strip_emphasis(trimmed[1..].trim()),
        };
    }

    // `1. numbered item`
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if !digits.is_empty() {
        let rest = &trimmed[digits.len()..];
        if let Some(after_dot) = rest.strip_prefix('.') {
            if after_dot.starts_with(char::is_whitespace) {
                if let Ok(index) = digits.parse::<u32>() {
                    return Fragment::NumberedItem {
                        index,
                        text: strip_emphasis(after_dot.trim()),
                    };
                }
            }
        }
    }

    Fragment::Plain {
        text: strip_emphasis(trimmed),
    }
}

fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").trim().to_string()
}

/// Renders a block of response text into its display tree — one fragment per
/// line. Empty input degrades to a single `Blank` node rather than an error.
pub fn render(text: &str) -> Vec<Fragment> {
    if text.is_empty() {
        return vec![Fragment::Blank];
    }
    text.lines().map(classify_line).collect()
}

/// Interprets a complete analysis response into the structured result the
/// analyze endpoint returns.
pub fn interpret(text: &str) -> Interpretation {
    let ats_score = extract_score(text);
    let (analysis, improvement) = split_into_analysis_and_improvement(text);

    let improvement_tips = render(&improvement)
        .into_iter()
        .filter_map(|fragment| match fragment {
            Fragment::Bullet { text } | Fragment::NumberedItem { text, .. } => {
                (!text.is_empty()).then_some(text)
            }
            _ => None,
        })
        .collect();

    Interpretation {
        ats_score,
        fit_analysis: analysis.trim().to_string(),
        improvement_tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── extract_score ───────────────────────────────────────────────────

    #[test]
    fn test_extract_score_ats_label() {
        assert_eq!(extract_score("**ATS SCORE: 72/100**"), Some(72));
    }

    #[test]
    fn test_extract_score_case_insensitive() {
        assert_eq!(extract_score("ats score: 85/100"), Some(85));
    }

    #[test]
    fn test_extract_score_overall_label() {
        assert_eq!(extract_score("Overall Score: 64/100"), Some(64));
    }

    #[test]
    fn test_extract_score_plain_label() {
        assert_eq!(extract_score("SCORE: 72/100"), Some(72));
    }

    #[test]
    fn test_extract_score_with_spaces_around_slash() {
        assert_eq!(extract_score("ATS SCORE: 90 / 100"), Some(90));
    }

    #[test]
    fn test_extract_score_first_match_wins() {
        let text = "ATS SCORE: 40/100\nOverall score: 90/100";
        assert_eq!(extract_score(text), Some(40));
    }

    #[test]
    fn test_extract_score_absent_returns_none_not_zero() {
        assert_eq!(extract_score("No score in this response."), None);
    }

    #[test]
    fn test_extract_score_empty_input() {
        assert_eq!(extract_score(""), None);
    }

    #[test]
    fn test_extract_score_requires_denominator() {
        assert_eq!(extract_score("SCORE: 72"), None);
        assert_eq!(extract_score("SCORE: 72/10"), None);
    }

    #[test]
    fn test_extract_score_out_of_range_passes_through() {
        // Documented quirk: no [0, 100] validation.
        assert_eq!(extract_score("SCORE: 250/100"), Some(250));
    }

    #[test]
    fn test_extract_score_mid_document() {
        let text = "**Summary:**\nGood resume.\n\n**ATS SCORE: 55/100**\nMore text.";
        assert_eq!(extract_score(text), Some(55));
    }

    // ── split_into_analysis_and_improvement ─────────────────────────────

    #[test]
    fn test_split_on_trigger_heading() {
        let text = "Strong skills section.\n**DETAILED IMPROVEMENT PLAN:**\n1. Add keywords";
        let (analysis, improvement) = split_into_analysis_and_improvement(text);
        assert_eq!(analysis, "Strong skills section.");
        assert!(improvement.starts_with("**DETAILED IMPROVEMENT PLAN:**"));
        assert!(improvement.contains("Add keywords"));
    }

    #[test]
    fn test_split_on_separator_token() {
        let text = "Analysis here.\n---\nImprovements here.";
        let (analysis, improvement) = split_into_analysis_and_improvement(text);
        assert_eq!(analysis, "Analysis here.");
        assert_eq!(improvement, "---\nImprovements here.");
    }

    #[test]
    fn test_split_no_trigger_everything_is_analysis() {
        let text = "Just analysis.\nNothing else.";
        let (analysis, improvement) = split_into_analysis_and_improvement(text);
        assert_eq!(analysis, text);
        assert!(improvement.is_empty());
    }

    #[test]
    fn test_split_trigger_is_case_sensitive() {
        let text = "before\ndetailed improvement plan\nafter";
        let (analysis, improvement) = split_into_analysis_and_improvement(text);
        assert_eq!(analysis, text);
        assert!(improvement.is_empty());
    }

    #[test]
    fn test_split_preserves_every_line_exactly_once() {
        let text = "a\nb\nATS OPTIMIZATION GUIDE\nc\nd";
        let (analysis, improvement) = split_into_analysis_and_improvement(text);
        let recombined: Vec<&str> = analysis.lines().chain(improvement.lines()).collect();
        let original: Vec<&str> = text.lines().collect();
        assert_eq!(recombined, original);
    }

    #[test]
    fn test_split_trigger_on_first_line() {
        let text = "ATS OPTIMIZATION RECOMMENDATIONS\n1. Fix formatting";
        let (analysis, improvement) = split_into_analysis_and_improvement(text);
        assert!(analysis.is_empty());
        assert_eq!(improvement, text);
    }

    // ── classify_line ───────────────────────────────────────────────────

    #[test]
    fn test_classify_bold_header() {
        assert_eq!(
            classify_line("**Summary:**"),
            Fragment::Header {
                text: "Summary".to_string()
            }
        );
    }

    #[test]
    fn test_classify_hash_header() {
        assert_eq!(
            classify_line("## Skills Match"),
            Fragment::Header {
                text: "Skills Match".to_string()
            }
        );
    }

    #[test]
    fn test_classify_star_bullet_strips_marker_and_emphasis() {
        assert_eq!(
            classify_line("* Good use of **metrics**"),
            Fragment::Bullet {
                text: "Good use of metrics".to_string()
            }
        );
    }

    #[test]
    fn test_classify_dash_bullet() {
        assert_eq!(
            classify_line("- Missing keywords"),
            Fragment::Bullet {
                text: "Missing keywords".to_string()
            }
        );
    }

    #[test]
    fn test_classify_numbered_item() {
        assert_eq!(
            classify_line("1. Add more keywords"),
            Fragment::NumberedItem {
                index: 1,
                text: "Add more keywords".to_string()
            }
        );
    }

    #[test]
    fn test_classify_multi_digit_numbered_item() {
        assert_eq!(
            classify_line("12. Quantify achievements"),
            Fragment::NumberedItem {
                index: 12,
                text: "Quantify achievements".to_string()
            }
        );
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify_line(""), Fragment::Blank);
        assert_eq!(classify_line("   "), Fragment::Blank);
    }

    #[test]
    fn test_classify_plain() {
        assert_eq!(
            classify_line("Your resume shows solid experience."),
            Fragment::Plain {
                text: "Your resume shows solid experience.".to_string()
            }
        );
    }

    #[test]
    fn test_classify_star_without_space_is_not_bullet() {
        // `*emphasis*` at line start is not a bullet marker
        assert!(matches!(classify_line("*emphasis*"), Fragment::Plain { .. }));
    }

    #[test]
    fn test_classify_number_without_dot_is_plain() {
        assert!(matches!(
            classify_line("2023 was a busy year"),
            Fragment::Plain { .. }
        ));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let inputs = ["**Summary:**", "* bullet", "3. item", "plain", ""];
        for input in inputs {
            assert_eq!(classify_line(input), classify_line(input));
        }
    }

    // ── render / interpret ──────────────────────────────────────────────

    #[test]
    fn test_render_empty_input_yields_single_blank_node() {
        assert_eq!(render(""), vec![Fragment::Blank]);
    }

    #[test]
    fn test_render_mixed_response_lines() {
        let text = "**Summary:**\n* Good use of metrics\n1. Add more keywords\nSCORE: 72/100";
        let fragments = render(text);
        assert_eq!(
            fragments[0],
            Fragment::Header {
                text: "Summary".to_string()
            }
        );
        assert_eq!(
            fragments[1],
            Fragment::Bullet {
                text: "Good use of metrics".to_string()
            }
        );
        assert_eq!(
            fragments[2],
            Fragment::NumberedItem {
                index: 1,
                text: "Add more keywords".to_string()
            }
        );
        assert_eq!(extract_score(text), Some(72));
    }

    #[test]
    fn test_interpret_full_response() {
        let text = "\
**ATS SCORE: 68/100**

**SKILLS MATCH ANALYSIS:**
* Strong backend experience
* Python and Rust featured prominently

**DETAILED IMPROVEMENT RECOMMENDATIONS:**
1. **MISSING KEYWORDS:** Add Kubernetes and Terraform
2. **QUANTIFY ACHIEVEMENTS:** Add metrics to the platform migration bullet
* Consider a summary section";

        let result = interpret(text);
        assert_eq!(result.ats_score, Some(68));
        assert!(result.fit_analysis.contains("SKILLS MATCH ANALYSIS"));
        assert!(!result.fit_analysis.contains("MISSING KEYWORDS"));
        assert_eq!(result.improvement_tips.len(), 3);
        assert!(result.improvement_tips[0].starts_with("MISSING KEYWORDS:"));
        assert_eq!(result.improvement_tips[2], "Consider a summary section");
    }

    #[test]
    fn test_interpret_empty_response_degrades_gracefully() {
        let result = interpret("");
        assert_eq!(result.ats_score, None);
        assert!(result.fit_analysis.is_empty());
        assert!(result.improvement_tips.is_empty());
    }

    #[test]
    fn test_interpret_unstructured_text_is_all_analysis() {
        let text = "The model ignored the requested format entirely.";
        let result = interpret(text);
        assert_eq!(result.ats_score, None);
        assert_eq!(result.fit_analysis, text);
        assert!(result.improvement_tips.is_empty());
    }

    #[test]
    fn test_fragment_serializes_with_kind_tag() {
        let json = serde_json::to_value(Fragment::Bullet {
            text: "item".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "bullet");
        assert_eq!(json["text"], "item");
    }
}
