// Resume analysis flow: upload validation, PDF text extraction,
// prompt building, and interpretation of the AI response.
// All LLM calls go through llm_client, no direct Gemini calls here.

pub mod handlers;
pub mod interpreter;
pub mod pdf;
pub mod prompts;
pub mod upload;
