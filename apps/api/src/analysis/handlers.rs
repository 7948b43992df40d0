//! Axum route handlers for the resume analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::analysis::interpreter::{interpret, Interpretation};
use crate::analysis::pdf::{self, TextStats};
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::upload::validate_upload;
use crate::errors::AppError;
use crate::state::AppState;

/// AI analysis refuses resumes with less extracted text than this.
const MIN_RESUME_CHARS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeMetadata {
    pub file_name: String,
    pub text_stats: TextStats,
    pub has_job_description: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: Interpretation,
    pub metadata: AnalyzeMetadata,
}

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub extracted_text: String,
    pub text_stats: TextStats,
}

#[derive(Debug, Serialize)]
pub struct ValidateFileResponse {
    pub valid: bool,
    pub filename: String,
}

/// The `resume` file field plus the optional `job_description` text field,
/// pulled out of a multipart form.
struct ResumeUpload {
    filename: String,
    bytes: bytes::Bytes,
    job_description: String,
}

async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut file: Option<(String, bytes::Bytes)> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                file = Some((filename, bytes));
            }
            Some("job_description") => {
                job_description = field.text().await?.trim().to_string();
            }
            _ => {}
        }
    }

    let (filename, bytes) = file.ok_or_else(|| {
        AppError::Validation(
            "No resume file provided. Please upload a resume in PDF format.".to_string(),
        )
    })?;

    Ok(ResumeUpload {
        filename,
        bytes,
        job_description,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze-resume
///
/// Multipart form: `resume` (PDF) and optional `job_description`.
/// Extracts text, runs one AI call, and interprets the response into
/// `{ ats_score, fit_analysis, improvement_tips }`.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    validate_upload(&upload.filename, &upload.bytes)?;

    let resume_text = pdf::extract_resume_text(&upload.bytes)?;
    if resume_text.trim().len() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(
            "Resume content is too short or empty. Please upload a complete resume.".to_string(),
        ));
    }

    let stats = pdf::text_stats(&resume_text);
    info!(
        file = %upload.filename,
        characters = stats.character_count,
        has_jd = !upload.job_description.is_empty(),
        "Resume extracted, starting AI analysis"
    );

    let prompt = build_analysis_prompt(&resume_text, &upload.job_description);
    let response_text = state.llm.call_text(&prompt, ANALYSIS_SYSTEM).await?;

    Ok(Json(AnalyzeResponse {
        analysis: interpret(&response_text),
        metadata: AnalyzeMetadata {
            file_name: upload.filename,
            text_stats: stats,
            has_job_description: !upload.job_description.is_empty(),
        },
    }))
}

/// POST /api/v1/extract-text
///
/// Extracts text from an uploaded PDF without AI analysis.
pub async fn handle_extract_text(
    multipart: Multipart,
) -> Result<Json<ExtractTextResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    validate_upload(&upload.filename, &upload.bytes)?;

    let extracted_text = pdf::extract_text(&upload.bytes)?;
    let text_stats = pdf::text_stats(&extracted_text);

    Ok(Json(ExtractTextResponse {
        extracted_text,
        text_stats,
    }))
}

/// POST /api/v1/validate-file
///
/// Validates an uploaded file without processing it.
pub async fn handle_validate_file(
    multipart: Multipart,
) -> Result<Json<ValidateFileResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    validate_upload(&upload.filename, &upload.bytes)?;

    Ok(Json(ValidateFileResponse {
        valid: true,
        filename: upload.filename,
    }))
}
