//! HTTP response handling for errors

use super::types::CoachError;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

const INTERNAL_MESSAGE: &str = "サーバー内部でエラーが発生しました。";

/// JSON body of every error response: `{ error, detail?, hint?, raw? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
            hint: None,
            raw: None,
        }
    }
}

impl CoachError {
    /// Build the JSON body for this error.
    pub fn body(&self) -> ErrorBody {
        match self {
            CoachError::MalformedRequest(detail) => ErrorBody {
                detail: Some(detail.clone()),
                ..ErrorBody::message(self.to_string())
            },
            CoachError::AudioTooLarge { limit } => ErrorBody {
                detail: Some(format!("limit: {} bytes", limit)),
                ..ErrorBody::message(self.to_string())
            },
            CoachError::TranscriptionFailed { detail, hint } => ErrorBody {
                detail: Some(detail.clone()),
                hint: Some(hint.clone()),
                ..ErrorBody::message(self.to_string())
            },
            // raw is always present for analysis failures, even when empty
            CoachError::AnalysisFailed { detail, raw } => ErrorBody {
                detail: Some(detail.clone()),
                raw: Some(raw.clone()),
                ..ErrorBody::message(self.to_string())
            },
            CoachError::AnalysisParseFailed { raw } => ErrorBody {
                raw: Some(raw.clone()),
                ..ErrorBody::message(self.to_string())
            },
            CoachError::Config(detail) | CoachError::Server(detail) => ErrorBody {
                detail: Some(detail.clone()),
                ..ErrorBody::message(INTERNAL_MESSAGE)
            },
            _ => ErrorBody::message(self.to_string()),
        }
    }
}

impl ResponseError for CoachError {
    fn status_code(&self) -> StatusCode {
        match self {
            CoachError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CoachError::MalformedRequest(_)
            | CoachError::MissingAudio
            | CoachError::MissingPhrase => StatusCode::BAD_REQUEST,
            CoachError::AudioTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            CoachError::ConfigurationMissing
            | CoachError::TranscriptionFailed { .. }
            | CoachError::AnalysisFailed { .. }
            | CoachError::AnalysisParseFailed { .. }
            | CoachError::Config(_)
            | CoachError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if matches!(self, CoachError::MethodNotAllowed) {
            response.insert_header((header::ALLOW, "POST"));
        }
        response.json(self.body())
    }
}
