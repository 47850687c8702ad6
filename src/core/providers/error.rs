//! Provider error handling
//!
//! One error type for every upstream call. Variants carry the provider name so log
//! lines stay attributable when more than one backend is configured.

/// Unified provider error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Request to {provider} timed out: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} API error (status {status}): {body}")]
    Api {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
        raw: String,
    },

    #[error("{provider} returned no output")]
    EmptyOutput { provider: &'static str, raw: String },

    #[error("Failed to read staged audio: {message}")]
    Io { message: String },
}

impl ProviderError {
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn api(provider: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            provider,
            status,
            body: body.into(),
        }
    }

    pub fn response_parsing(
        provider: &'static str,
        message: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
            raw: raw.into(),
        }
    }

    /// Classify a transport error, separating timeouts from other network failures
    pub fn from_reqwest(provider: &'static str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                provider,
                message: error.to_string(),
            }
        } else {
            Self::network(provider, error.to_string())
        }
    }

    /// Raw text the provider produced before the failure, if any
    pub fn partial_output(&self) -> Option<&str> {
        match self {
            Self::ResponseParsing { raw, .. } | Self::EmptyOutput { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// HTTP status returned by the provider, if the failure came with one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
