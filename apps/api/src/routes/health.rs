use axum::Json;
use serde_json::{json, Value};

/// GET / and GET /health
/// Returns a simple status object with service version and feature list.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resumatch-api",
        "features": ["resume_analysis", "latex_editor", "ai_enhancement", "templates"]
    }))
}
