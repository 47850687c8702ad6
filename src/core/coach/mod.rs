//! Pronunciation coaching flow
//!
//! One request runs strictly in order: stage the upload, transcribe it, remove the
//! staged file, ask the analyzer for feedback, then merge the transcript with the
//! parsed analysis.

pub mod prompt;
mod service;
mod types;

pub use prompt::{COACH_PROMPT, EMPTY_TRANSCRIPT_MARKER, user_message};
pub use service::{CoachService, TRANSCRIPTION_LANGUAGE};
pub use types::{AudioUpload, CoachForm, CoachRequest, CoachResult};
