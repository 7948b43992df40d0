//! HTTP handlers for the LaTeX editor endpoints: validation, formatting,
//! compilation, generation from structured data, and the AI enhancement
//! routes.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;
use crate::latex::ai;
use crate::latex::service::{extract_sections, format_latex, validate_latex, LatexSection, ValidationReport};
use crate::latex::templates::{self, ResumeData, TemplateInfo, TemplateKind};
use crate::state::AppState;

// ─────────────────────────── Request payloads ───────────────────────────

#[derive(Debug, Deserialize)]
pub struct LatexCodeRequest {
    #[serde(default)]
    pub latex_code: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub data: ResumeData,
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    "modern".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    #[serde(default)]
    pub latex_code: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct BulletsRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub responsibilities: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestSkillsRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveSectionRequest {
    #[serde(default)]
    pub section_name: String,
    #[serde(default)]
    pub section_content: String,
}

fn require_latex_code(latex_code: &str) -> Result<(), AppError> {
    if latex_code.trim().is_empty() {
        return Err(AppError::Validation("No LaTeX code provided".to_string()));
    }
    Ok(())
}

// ─────────────────────────── Editor endpoints ───────────────────────────

pub async fn handle_validate(
    Json(req): Json<LatexCodeRequest>,
) -> Result<Json<ValidationReport>, AppError> {
    require_latex_code(&req.latex_code)?;
    Ok(Json(validate_latex(&req.latex_code)))
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub formatted_code: String,
}

pub async fn handle_format(
    Json(req): Json<LatexCodeRequest>,
) -> Result<Json<FormatResponse>, AppError> {
    require_latex_code(&req.latex_code)?;
    Ok(Json(FormatResponse {
        formatted_code: format_latex(&req.latex_code),
    }))
}

/// Compiles the submitted document and returns the PDF bytes as an
/// attachment download.
pub async fn handle_compile(
    State(state): State<AppState>,
    Json(req): Json<LatexCodeRequest>,
) -> Result<Response, AppError> {
    require_latex_code(&req.latex_code)?;
    let pdf = state.compiler.compile(&req.latex_code).await?;
    tracing::info!(bytes = pdf.len(), "compiled LaTeX document");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"resume.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response())
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub latex_code: String,
    pub template: String,
}

pub async fn handle_generate(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let kind = template_or_404(&req.template)?;
    Ok(Json(GenerateResponse {
        latex_code: kind.generate(&req.data),
        template: req.template,
    }))
}

#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub sections: Vec<LatexSection>,
}

pub async fn handle_sections(
    Json(req): Json<LatexCodeRequest>,
) -> Result<Json<SectionsResponse>, AppError> {
    require_latex_code(&req.latex_code)?;
    Ok(Json(SectionsResponse {
        sections: extract_sections(&req.latex_code),
    }))
}

pub async fn handle_starter() -> Json<serde_json::Value> {
    Json(json!({ "latex_code": templates::STARTER_TEMPLATE }))
}

// ─────────────────────────── AI endpoints ───────────────────────────

pub async fn handle_ai_improve(
    State(state): State<AppState>,
    Json(req): Json<ImproveRequest>,
) -> Result<Json<ai::AiImproveResult>, AppError> {
    require_latex_code(&req.latex_code)?;
    let result = ai::improve_resume(&state.llm, &req.latex_code, &req.job_description).await?;
    Ok(Json(result))
}

pub async fn handle_ai_ats_check(
    State(state): State<AppState>,
    Json(req): Json<LatexCodeRequest>,
) -> Result<Json<ai::AtsCheckResult>, AppError> {
    require_latex_code(&req.latex_code)?;
    let result = ai::check_ats_compatibility(&state.llm, &req.latex_code).await?;
    Ok(Json(result))
}

#[derive(Debug, Serialize)]
pub struct BulletsResponse {
    pub bullets: Vec<String>,
}

pub async fn handle_ai_bullets(
    State(state): State<AppState>,
    Json(req): Json<BulletsRequest>,
) -> Result<Json<BulletsResponse>, AppError> {
    if req.role.trim().is_empty() {
        return Err(AppError::Validation("No role provided".to_string()));
    }
    let bullets =
        ai::generate_bullet_points(&state.llm, &req.role, &req.company, &req.responsibilities)
            .await?;
    Ok(Json(BulletsResponse { bullets }))
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    pub suggested_skills: Vec<String>,
}

pub async fn handle_ai_suggest_skills(
    State(state): State<AppState>,
    Json(req): Json<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "No job description provided".to_string(),
        ));
    }
    let suggested_skills =
        ai::suggest_skills(&state.llm, &req.current_skills, &req.job_description).await?;
    Ok(Json(SuggestSkillsResponse { suggested_skills }))
}

#[derive(Debug, Serialize)]
pub struct ImproveSectionResponse {
    pub section_name: String,
    pub improved_content: String,
}

pub async fn handle_ai_improve_section(
    State(state): State<AppState>,
    Json(req): Json<ImproveSectionRequest>,
) -> Result<Json<ImproveSectionResponse>, AppError> {
    if req.section_content.trim().is_empty() {
        return Err(AppError::Validation(
            "No section content provided".to_string(),
        ));
    }
    let improved_content =
        ai::improve_section(&state.llm, &req.section_name, &req.section_content).await?;
    Ok(Json(ImproveSectionResponse {
        section_name: req.section_name,
        improved_content,
    }))
}

// ─────────────────────────── Template catalog ───────────────────────────

fn template_or_404(id: &str) -> Result<TemplateKind, AppError> {
    TemplateKind::from_id(id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown template: {id}")))
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<TemplateInfo>,
    pub count: usize,
}

pub async fn handle_list_templates() -> Json<TemplatesResponse> {
    let templates: Vec<TemplateInfo> = TemplateKind::ALL.iter().map(|t| t.info()).collect();
    let count = templates.len();
    Json(TemplatesResponse { templates, count })
}

pub async fn handle_template_info(
    Path(id): Path<String>,
) -> Result<Json<TemplateInfo>, AppError> {
    Ok(Json(template_or_404(&id)?.info()))
}

pub async fn handle_template_preview(
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let kind = template_or_404(&id)?;
    let latex_code = kind.generate(&templates::sample_data());
    Ok(Json(json!({
        "template": kind.info(),
        "latex_code": latex_code,
    })))
}
