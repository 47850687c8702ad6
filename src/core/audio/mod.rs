//! Audio staging for speech-to-text
//!
//! Uploaded audio is written to a request-scoped temporary file before it is
//! handed to the transcription provider.

mod staging;
mod types;

pub use staging::{STAGED_FILE_PREFIX, StagedAudio, staged_file_name};
pub use types::{DEFAULT_EXTENSION, extension_for, mime_for_extension};
