//! Coaching orchestration

use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::prompt::{COACH_PROMPT, user_message};
use super::types::{CoachRequest, CoachResult};
use crate::config::CoachConfig;
use crate::core::audio::StagedAudio;
use crate::core::providers::{AnalysisInput, Analyzer, TranscriptionInput, Transcriber};
use crate::utils::error::{CoachError, Result};
use crate::utils::logging::sanitize_for_log;

/// Source-language hint sent with every transcription
pub const TRANSCRIPTION_LANGUAGE: &str = "en";

/// Runs one coaching request against the configured providers
pub struct CoachService {
    transcriber: Arc<dyn Transcriber>,
    analyzer: Arc<dyn Analyzer>,
    config: Arc<CoachConfig>,
}

impl std::fmt::Debug for CoachService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachService")
            .field("transcriber", &self.transcriber.name())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl CoachService {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        analyzer: Arc<dyn Analyzer>,
        config: Arc<CoachConfig>,
    ) -> Self {
        Self {
            transcriber,
            analyzer,
            config,
        }
    }

    /// Whether a provider credential is available
    pub fn is_configured(&self) -> bool {
        self.transcriber.is_configured()
    }

    /// Transcribe the upload and coach on the result.
    ///
    /// No provider call is made when the service is unconfigured. The staged
    /// file is gone before the analysis call starts.
    pub async fn coach(&self, request: CoachRequest) -> Result<CoachResult> {
        if !self.is_configured() {
            return Err(CoachError::ConfigurationMissing);
        }

        let started = Instant::now();
        info!(
            target_phrase = %sanitize_for_log(&request.target_phrase),
            audio_bytes = request.audio.bytes.len(),
            "Coaching request accepted"
        );

        let transcript = self.transcribe(&request).await?;
        let raw = self.analyze(&request.target_phrase, &transcript).await?;

        let analysis: Value = serde_json::from_str(&raw).map_err(|e| {
            error!(error = %e, raw = %sanitize_for_log(&raw), "Analysis output is not JSON");
            CoachError::analysis_parse_failed(raw.clone())
        })?;

        if !analysis.is_object() {
            warn!(raw = %sanitize_for_log(&raw), "Analysis output is JSON but not an object");
        }

        info!(
            transcript_chars = transcript.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Coaching complete"
        );
        Ok(CoachResult::assemble(transcript, analysis))
    }

    async fn transcribe(&self, request: &CoachRequest) -> Result<String> {
        let model = self.config.openai.transcribe_model.as_str();

        let staged = StagedAudio::write(
            &self.config.staging_dir(),
            request.audio.filename.as_deref(),
            &request.audio.bytes,
        )
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to stage audio upload");
            CoachError::transcription_failed(e.to_string(), model)
        })?;

        let input = TranscriptionInput {
            path: staged.path().to_path_buf(),
            filename: staged.file_name(),
            language: TRANSCRIPTION_LANGUAGE.to_string(),
            model: model.to_string(),
        };
        let result = self.transcriber.transcribe(&input).await;
        drop(staged);

        match result {
            Ok(text) => {
                let transcript = text.trim().to_string();
                debug!(
                    provider = self.transcriber.name(),
                    transcript = %sanitize_for_log(&transcript),
                    "Transcription complete"
                );
                Ok(transcript)
            }
            Err(e) => {
                error!(provider = self.transcriber.name(), model, error = %e, "Transcription failed");
                Err(CoachError::transcription_failed(e.to_string(), model))
            }
        }
    }

    async fn analyze(&self, target_phrase: &str, transcript: &str) -> Result<String> {
        let input = AnalysisInput {
            system_prompt: COACH_PROMPT.to_string(),
            user_content: user_message(target_phrase, transcript),
            model: self.config.openai.analysis_model.clone(),
            json_object: true,
        };

        match self.analyzer.analyze(&input).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                error!(provider = self.analyzer.name(), error = %e, "Analysis failed");
                let raw = e.partial_output().unwrap_or_default().to_string();
                Err(CoachError::analysis_failed(e.to_string(), raw))
            }
        }
    }
}
