pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::config::MAX_UPLOAD_BYTES;
use crate::latex::handlers as latex;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        // Resume analysis API
        .route("/api/v1/analyze-resume", post(analysis::handle_analyze_resume))
        .route("/api/v1/extract-text", post(analysis::handle_extract_text))
        .route("/api/v1/validate-file", post(analysis::handle_validate_file))
        // LaTeX editor API
        .route("/api/v1/latex/validate", post(latex::handle_validate))
        .route("/api/v1/latex/format", post(latex::handle_format))
        .route("/api/v1/latex/compile", post(latex::handle_compile))
        .route("/api/v1/latex/generate", post(latex::handle_generate))
        .route("/api/v1/latex/sections", post(latex::handle_sections))
        .route("/api/v1/latex/starter", get(latex::handle_starter))
        // AI enhancement API
        .route("/api/v1/latex/ai/improve", post(latex::handle_ai_improve))
        .route("/api/v1/latex/ai/bullets", post(latex::handle_ai_bullets))
        .route("/api/v1/latex/ai/ats-check", post(latex::handle_ai_ats_check))
        .route(
            "/api/v1/latex/ai/suggest-skills",
            post(latex::handle_ai_suggest_skills),
        )
        .route(
            "/api/v1/latex/ai/improve-section",
            post(latex::handle_ai_improve_section),
        )
        // Template catalog
        .route("/api/v1/templates", get(latex::handle_list_templates))
        .route("/api/v1/templates/:id", get(latex::handle_template_info))
        .route(
            "/api/v1/templates/:id/preview",
            get(latex::handle_template_preview),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
