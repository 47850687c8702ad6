//! Upstream AI capabilities
//!
//! The coaching flow depends on two capabilities, each behind a trait so the HTTP
//! layer and tests can swap the implementation:
//!
//! | Trait | Input | Output |
//! |-------|-------|--------|
//! | [`Transcriber`] | staged audio file, language hint, model | transcript text |
//! | [`Analyzer`] | system prompt, user content, model, JSON-object flag | generated text |
//!
//! [`openai::OpenAIClient`] implements both against an OpenAI-compatible API.

mod error;
pub mod openai;
mod traits;

pub use error::ProviderError;
pub use traits::{AnalysisInput, Analyzer, TranscriptionInput, Transcriber};
