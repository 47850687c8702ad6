//! Upstream provider configuration

use clap::Args;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TRANSCRIBE_MODEL: &str = "whisper-1";
pub const DEFAULT_ANALYSIS_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 60;

/// OpenAI provider configuration
#[derive(Clone, Args)]
pub struct OpenAIConfig {
    /// API credential; the service starts without one but refuses coaching requests
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long = "openai-api-base", env = "OPENAI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Speech-to-text model
    #[arg(long, env = "OPENAI_TRANSCRIBE_MODEL", default_value = DEFAULT_TRANSCRIBE_MODEL)]
    pub transcribe_model: String,

    /// Chat model used for the analysis
    #[arg(long, env = "OPENAI_ANALYSIS_MODEL", default_value = DEFAULT_ANALYSIS_MODEL)]
    pub analysis_model: String,

    /// Upper bound for each provider call, in seconds
    #[arg(long = "provider-timeout-secs", env = "COACH_PROVIDER_TIMEOUT_SECS", default_value_t = DEFAULT_PROVIDER_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            transcribe_model: DEFAULT_TRANSCRIBE_MODEL.to_string(),
            analysis_model: DEFAULT_ANALYSIS_MODEL.to_string(),
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

// Hand-written so the credential never lands in a log line.
impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("api_key", &self.api_key().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("transcribe_model", &self.transcribe_model)
            .field("analysis_model", &self.analysis_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl OpenAIConfig {
    /// Non-blank credential, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// API base without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_default_transcribe_model(&self) -> bool {
        self.transcribe_model == DEFAULT_TRANSCRIBE_MODEL
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(format!("API base must be an http(s) URL: {}", self.api_base));
        }

        if self.transcribe_model.trim().is_empty() {
            return Err("Transcription model cannot be empty".to_string());
        }

        if self.analysis_model.trim().is_empty() {
            return Err("Analysis model cannot be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Provider timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
