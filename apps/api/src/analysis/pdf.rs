//! Text Extractor — thin wrapper over `pdf-extract` that translates library
//! failures into the client-observable error taxonomy and cleans the output.

use serde::Serialize;
use thiserror::Error;

/// Minimum cleaned-text length for a document to count as a resume.
const MIN_RESUME_CHARS: usize = 100;

/// A document should mention at least this many resume keywords.
const MIN_KEYWORD_HITS: usize = 3;

const RESUME_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "work",
    "employment",
    "university",
    "college",
    "degree",
    "bachelor",
    "master",
    "project",
    "achievement",
    "responsibility",
    "job",
    "career",
    "professional",
    "technical",
    "qualification",
    "certificate",
];

/// Garbage sequences some PDF producers leave in extracted text.
const ARTIFACTS: &[&str] = &["\u{0}", "\u{feff}", "\u{fffd}"];

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Cannot process encrypted PDF files. Please upload an unencrypted version.")]
    Encrypted,

    #[error("Could not extract text from PDF. The file might be image-based or corrupted.")]
    NoText,

    #[error("This doesn't appear to be a resume. Please upload a valid resume document.")]
    NotAResume,

    #[error("Invalid or corrupted PDF file. Please upload a valid PDF resume.")]
    Corrupt(String),
}

/// Statistics about extracted resume text, returned as response metadata.
#[derive(Debug, Clone, Serialize)]
pub struct TextStats {
    pub character_count: usize,
    pub word_count: usize,
    pub line_count: usize,
    pub has_contact_info: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
}

/// Extracts and cleans text from PDF bytes, then checks it looks like a resume.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, PdfError> {
    let raw = pdf_extract::extract_text_from_mem(bytes).map_err(classify_extract_error)?;

    let cleaned = clean_text(&raw);
    if cleaned.is_empty() {
        return Err(PdfError::NoText);
    }

    if !is_resume_content(&cleaned) {
        return Err(PdfError::NotAResume);
    }

    Ok(cleaned)
}

/// Extracts and cleans text without the resume-content heuristic.
/// Used by the standalone extract-text endpoint.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let raw = pdf_extract::extract_text_from_mem(bytes).map_err(classify_extract_error)?;

    let cleaned = clean_text(&raw);
    if cleaned.is_empty() {
        return Err(PdfError::NoText);
    }

    Ok(cleaned)
}

fn classify_extract_error(err: pdf_extract::OutputError) -> PdfError {
    let message = err.to_string();
    if message.to_lowercase().contains("encrypt") {
        PdfError::Encrypted
    } else {
        PdfError::Corrupt(message)
    }
}

/// Normalizes extracted text: trims lines, drops empty ones, and removes
/// producer artifacts (NUL, BOM, replacement characters).
pub fn clean_text(text: &str) -> String {
    let mut cleaned: String = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    for artifact in ARTIFACTS {
        if cleaned.contains(artifact) {
            cleaned = cleaned.replace(artifact, "");
        }
    }

    cleaned
}

/// Heuristic: does the extracted text look like a resume at all?
pub fn is_resume_content(text: &str) -> bool {
    if text.trim().len() < MIN_RESUME_CHARS {
        return false;
    }

    let lower = text.to_lowercase();
    let hits = RESUME_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(**keyword))
        .count();

    hits >= MIN_KEYWORD_HITS
}

/// Computes response metadata about the extracted text.
pub fn text_stats(text: &str) -> TextStats {
    let lower = text.to_lowercase();
    let contains_any =
        |keywords: &[&str]| keywords.iter().any(|keyword| lower.contains(*keyword));

    TextStats {
        character_count: text.len(),
        word_count: text.split_whitespace().count(),
        line_count: text.lines().count(),
        has_contact_info: contains_any(&["email", "@", "phone", "linkedin"]),
        has_experience: contains_any(&["experience", "work", "employment", "job"]),
        has_education: contains_any(&["education", "degree", "university", "college"]),
        has_skills: contains_any(&["skills", "technical", "programming", "software"]),
    }
}
