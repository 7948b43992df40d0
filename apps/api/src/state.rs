use std::sync::Arc;

use crate::config::Config;
use crate::latex::compile::LatexCompiler;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable LaTeX compiler. Default: PdflatexCompiler. Stubbed in router tests.
    pub compiler: Arc<dyn LatexCompiler>,
}
