use anyhow::{Context, Result};

/// Maximum accepted upload size for resume PDFs (16 MiB).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Resume text is truncated to this many characters before prompting.
pub const RESUME_TEXT_LIMIT: usize = 4000;

/// Job descriptions are truncated to this many characters before prompting.
pub const JOB_DESCRIPTION_LIMIT: usize = 1500;

/// Application configuration loaded from environment variables.
/// Constructed once at startup and carried in `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
