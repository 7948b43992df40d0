//! Pure LaTeX source operations: validation, formatting, section extraction.
//! Compilation lives in `compile.rs`.

use serde::Serialize;

/// Result of validating LaTeX source for common structural errors.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// One `\section{...}` block extracted from resume source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatexSection {
    pub name: String,
    pub content: String,
    pub order: usize,
}

/// Validates LaTeX code for common errors: missing document skeleton,
/// unbalanced braces, unbalanced environments. This is a lint pass, not a
/// compiler: it catches the mistakes the editor UI flags while typing.
pub fn validate_latex(latex_code: &str) -> ValidationReport {
    let mut errors = Vec::new();

    if !latex_code.contains("\\documentclass") {
        errors.push("Missing \\documentclass declaration".to_string());
    }
    if !latex_code.contains("\\begin{document}") {
        errors.push("Missing \\begin{document}".to_string());
    }
    if !latex_code.contains("\\end{document}") {
        errors.push("Missing \\end{document}".to_string());
    }

    let open_braces = latex_code.matches('{').count();
    let close_braces = latex_code.matches('}').count();
    if open_braces != close_braces {
        errors.push(format!(
            "Unbalanced braces: {open_braces} opening, {close_braces} closing"
        ));
    }

    let begin_envs = environment_names(latex_code, "\\begin{");
    let end_envs = environment_names(latex_code, "\\end{");
    let mut reported = Vec::new();
    for env in &begin_envs {
        if reported.contains(env) {
            continue;
        }
        let begins = begin_envs.iter().filter(|e| *e == env).count();
        let ends = end_envs.iter().filter(|e| *e == env).count();
        if begins != ends {
            errors.push(format!("Unbalanced environment: {env}"));
            reported.push(env.clone());
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Collects environment names following each occurrence of `marker`
/// (either `\begin{` or `\end{`).
fn environment_names(latex_code: &str, marker: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = latex_code;
    while let Some(pos) = rest.find(marker) {
        rest = &rest[pos + marker.len()..];
        if let Some(close) = rest.find('}') {
            let name = &rest[..close];
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '*') {
                names.push(name.to_string());
            }
            rest = &rest[close + 1..];
        } else {
            break;
        }
    }
    names
}

/// Formats LaTeX code by collapsing runs of blank lines to a single one.
pub fn format_latex(latex_code: &str) -> String {
    let mut formatted = Vec::new();
    let mut prev_blank = false;

    for line in latex_code.lines() {
        let is_blank = line.trim().is_empty();
        if !(is_blank && prev_blank) {
            formatted.push(line);
        }
        prev_blank = is_blank;
    }

    formatted.join("\n")
}

/// Extracts `\section{name}` / `\section*{name}` blocks and the content
/// between them. Content runs to the next section or `\end{document}`.
pub fn extract_sections(latex_code: &str) -> Vec<LatexSection> {
    let mut sections = Vec::new();
    let mut search_from = 0;
    let mut starts: Vec<(usize, String, usize)> = Vec::new(); // (content_start, name, cmd_start)

    while let Some(rel) = latex_code[search_from..].find("\\section") {
        let cmd_start = search_from + rel;
        let mut after = cmd_start + "\\section".len();
        if latex_code[after..].starts_with('*') {
            after += 1;
        }
        if !latex_code[after..].starts_with('{') {
            search_from = after;
            continue;
        }
        let name_start = after + 1;
        let Some(name_len) = latex_code[name_start..].find('}') else {
            break;
        };
        let name = latex_code[name_start..name_start + name_len].trim().to_string();
        let content_start = name_start + name_len + 1;
        starts.push((content_start, name, cmd_start));
        search_from = content_start;
    }

    for (order, (content_start, name, _)) in starts.iter().enumerate() {
        let content_end = starts
            .get(order + 1)
            .map(|(_, _, next_cmd)| *next_cmd)
            .unwrap_or_else(|| {
                latex_code
                    .find("\\end{document}")
                    .filter(|end| end > content_start)
                    .unwrap_or(latex_code.len())
            });
        sections.push(LatexSection {
            name: name.clone(),
            content: latex_code[*content_start..content_end].trim().to_string(),
            order,
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_DOC: &str = r"\documentclass{article}
\begin{document}
\section{Experience}
Worked on things.
\begin{itemize}
\item One
\end{itemize}
\section*{Education}
A degree.
\end{document}";

    #[test]
    fn test_valid_document_passes() {
        let report = validate_latex(VALID_DOC);
        assert!(report.is_valid, "errors: {:?}", report.errors);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_documentclass() {
        let report = validate_latex("\\begin{document}\\end{document}");
        assert!(!report.is_valid);
        assert!(report.errors[0].contains("documentclass"));
    }

    #[test]
    fn test_missing_begin_document() {
        let report = validate_latex("\\documentclass{article}\\end{document}");
        assert!(report.errors.iter().any(|e| e.contains("\\begin{document}")));
    }

    #[test]
    fn test_unbalanced_braces_reported_with_counts() {
        let report = validate_latex("\\documentclass{article}\\begin{document}{\\end{document}");
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Unbalanced braces")));
    }

    #[test]
    fn test_unbalanced_environment() {
        let code = r"\documentclass{article}
\begin{document}
\begin{itemize}
\item One
\end{document}";
        let report = validate_latex(code);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Unbalanced environment: itemize")));
    }

    #[test]
    fn test_balanced_repeated_environment_passes() {
        let code = r"\documentclass{article}
\begin{document}
\begin{itemize}\item A\end{itemize}
\begin{itemize}\item B\end{itemize}
\end{document}";
        assert!(validate_latex(code).is_valid);
    }

    #[test]
    fn test_format_collapses_blank_runs() {
        let input = "a\n\n\n\nb\n\nc";
        assert_eq!(format_latex(input), "a\n\nb\n\nc");
    }

    #[test]
    fn test_format_preserves_single_blanks() {
        let input = "a\n\nb";
        assert_eq!(format_latex(input), input);
    }

    #[test]
    fn test_extract_sections_names_and_order() {
        let sections = extract_sections(VALID_DOC);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name, "Experience");
        assert_eq!(sections[0].order, 0);
        assert_eq!(sections[1].name, "Education");
        assert_eq!(sections[1].order, 1);
    }

    #[test]
    fn test_extract_sections_content_bounds() {
        let sections = extract_sections(VALID_DOC);
        assert!(sections[0].content.contains("Worked on things."));
        assert!(!sections[0].content.contains("A degree."));
        assert_eq!(sections[1].content, "A degree.");
    }

    #[test]
    fn test_extract_sections_none_found() {
        assert!(extract_sections("\\documentclass{article}").is_empty());
    }
}
