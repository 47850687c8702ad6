//! Helper functions for creating specific error types

use super::types::CoachError;
use crate::config::DEFAULT_TRANSCRIBE_MODEL;

const HINT_TRY_DEFAULT_MODEL: &str = "OPENAI_TRANSCRIBE_MODEL=whisper-1 を試してください。";
const HINT_CHECK_ENVIRONMENT: &str = "APIキー・音声形式・ネットワークを確認してください。";

impl CoachError {
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedRequest(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Transcription failure with an operator hint chosen from the configured model.
    pub fn transcription_failed<S: Into<String>>(detail: S, model: &str) -> Self {
        let hint = if model != DEFAULT_TRANSCRIBE_MODEL {
            HINT_TRY_DEFAULT_MODEL
        } else {
            HINT_CHECK_ENVIRONMENT
        };
        Self::TranscriptionFailed {
            detail: detail.into(),
            hint: hint.to_string(),
        }
    }

    pub fn analysis_failed<S: Into<String>, R: Into<String>>(detail: S, raw: R) -> Self {
        Self::AnalysisFailed {
            detail: detail.into(),
            raw: raw.into(),
        }
    }

    pub fn analysis_parse_failed<R: Into<String>>(raw: R) -> Self {
        Self::AnalysisParseFailed { raw: raw.into() }
    }

    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::ConfigurationMissing => "CONFIGURATION_MISSING",
            Self::MalformedRequest(_) => "MALFORMED_REQUEST",
            Self::MissingAudio => "MISSING_AUDIO",
            Self::MissingPhrase => "MISSING_PHRASE",
            Self::AudioTooLarge { .. } => "AUDIO_TOO_LARGE",
            Self::TranscriptionFailed { .. } => "TRANSCRIPTION_FAILED",
            Self::AnalysisFailed { .. } => "ANALYSIS_FAILED",
            Self::AnalysisParseFailed { .. } => "ANALYSIS_PARSE_FAILED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Server(_) => "SERVER_ERROR",
        }
    }

    /// Whether the error was caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MethodNotAllowed
                | Self::MalformedRequest(_)
                | Self::MissingAudio
                | Self::MissingPhrase
                | Self::AudioTooLarge { .. }
        )
    }
}
