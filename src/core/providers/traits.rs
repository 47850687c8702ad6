//! Capability traits

use async_trait::async_trait;
use std::path::PathBuf;

use super::error::ProviderError;

/// Parameters of one speech-to-text call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionInput {
    /// Staged audio file to upload
    pub path: PathBuf,
    /// File name sent to the provider; its extension tells the provider the container
    pub filename: String,
    /// ISO-639-1 language hint
    pub language: String,
    pub model: String,
}

/// Parameters of one structured-generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    pub system_prompt: String,
    pub user_content: String,
    pub model: String,
    /// Ask the provider to constrain its output to a single JSON object
    pub json_object: bool,
}

/// Speech-to-text capability
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Whether a credential is available; no call is attempted otherwise
    fn is_configured(&self) -> bool;

    /// Transcribe the staged file. The returned text may be empty.
    async fn transcribe(&self, input: &TranscriptionInput) -> Result<String, ProviderError>;
}

/// Structured text-generation capability
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Run the generation and return the raw output text, unparsed.
    async fn analyze(&self, input: &AnalysisInput) -> Result<String, ProviderError>;
}
