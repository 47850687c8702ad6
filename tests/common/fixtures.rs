//! Test fixtures
//!
//! Configuration factories and a hand-built multipart/form-data body.

use super::providers::{StubAnalyzer, StubTranscriber};
use actix_web::http::header;
use actix_web::test::TestRequest;
use actix_web::web;
use phrase_coach::{AppState, CoachConfig};
use std::sync::Arc;
use tempfile::TempDir;

const BOUNDARY: &str = "----phrase-coach-test-boundary";

/// Config with a credential, staging into `staging`
pub fn configured(staging: &TempDir) -> CoachConfig {
    let mut config = CoachConfig::default();
    config.openai.api_key = Some("sk-test".to_string());
    config.staging_dir = Some(staging.path().to_path_buf());
    config
}

/// Config without a credential, staging into `staging`
pub fn unconfigured(staging: &TempDir) -> CoachConfig {
    let mut config = configured(staging);
    config.openai.api_key = None;
    config
}

/// Builder for a multipart/form-data body
#[derive(Debug, Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Audio part with the field name the endpoint expects
    pub fn audio(self, filename: &str, bytes: &[u8]) -> Self {
        self.file("audio", filename, "audio/webm", bytes)
    }

    pub fn target_phrase(self, phrase: &str) -> Self {
        self.text("targetPhrase", phrase)
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// `POST /api/coach` carrying `body`
pub fn coach_request(body: MultipartBody) -> TestRequest {
    TestRequest::post()
        .uri("/api/coach")
        .insert_header((header::CONTENT_TYPE, MultipartBody::content_type()))
        .set_payload(body.finish())
}

/// Shared state wired to the given stubs
pub fn app_state(
    config: CoachConfig,
    transcriber: &Arc<StubTranscriber>,
    analyzer: &Arc<StubAnalyzer>,
) -> web::Data<AppState> {
    web::Data::new(AppState::new(config, transcriber.clone(), analyzer.clone()))
}
