//! Configuration management for the coaching service
//!
//! Configuration is read once at process start, from CLI flags or the environment
//! (a `.env` file is loaded first by the binary), validated, and then shared
//! read-only for the lifetime of the process.

mod provider;
mod server;

pub use provider::{
    DEFAULT_ANALYSIS_MODEL, DEFAULT_API_BASE, DEFAULT_PROVIDER_TIMEOUT_SECS,
    DEFAULT_TRANSCRIBE_MODEL, OpenAIConfig,
};
pub use server::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_UPLOAD_LIMIT_BYTES, ServerConfig};

use crate::utils::error::{CoachError, Result};
use crate::utils::logging::LogFormat;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "phrase-coach",
    version,
    about = "Pronunciation coaching API: speech-to-text plus structured feedback"
)]
pub struct CoachConfig {
    /// HTTP listener settings
    #[command(flatten)]
    pub server: ServerConfig,

    /// Upstream AI provider settings
    #[command(flatten)]
    pub openai: OpenAIConfig,

    /// Directory for request-scoped audio files (defaults to the OS temp dir)
    #[arg(long, env = "COACH_STAGING_DIR")]
    pub staging_dir: Option<PathBuf>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl CoachConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| CoachError::config(format!("Server config error: {}", e)))?;
        self.openai
            .validate()
            .map_err(|e| CoachError::config(format!("Provider config error: {}", e)))?;

        if let Some(dir) = &self.staging_dir {
            if dir.as_os_str().is_empty() {
                return Err(CoachError::config("Staging directory cannot be empty"));
            }
        }

        Ok(())
    }

    /// Directory where uploads are staged
    pub fn staging_dir(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        self.server.address()
    }

    /// Whether a provider credential is present
    pub fn has_credential(&self) -> bool {
        self.openai.api_key().is_some()
    }

    /// Upper bound for a single provider call
    pub fn provider_timeout(&self) -> Duration {
        self.openai.timeout()
    }

    pub fn is_default_transcribe_model(&self) -> bool {
        self.openai.is_default_transcribe_model()
    }
}
