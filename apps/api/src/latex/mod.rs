// LaTeX editor backend: validation, formatting, compilation, templates,
// and AI-powered enhancement. All LLM calls go through llm_client.

pub mod ai;
pub mod compile;
pub mod handlers;
pub mod prompts;
pub mod service;
pub mod templates;
