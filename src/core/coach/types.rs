//! Request and result types of the coaching flow

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::error::{CoachError, Result};

/// Uploaded audio as received, before staging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUpload {
    /// Client-supplied file name; only its extension is used
    pub filename: Option<String>,
    pub bytes: Bytes,
}

/// A validated coaching request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachRequest {
    pub audio: AudioUpload,
    /// Trimmed, never empty
    pub target_phrase: String,
}

/// Multipart fields collected so far
#[derive(Debug, Default)]
pub struct CoachForm {
    pub audio: Option<AudioUpload>,
    pub target_phrase: Option<String>,
}

impl CoachForm {
    /// Validate the collected fields. Audio is checked before the phrase.
    pub fn into_request(self) -> Result<CoachRequest> {
        let audio = self
            .audio
            .filter(|audio| !audio.bytes.is_empty())
            .ok_or(CoachError::MissingAudio)?;

        let target_phrase = self
            .target_phrase
            .as_deref()
            .map(str::trim)
            .filter(|phrase| !phrase.is_empty())
            .ok_or(CoachError::MissingPhrase)?
            .to_string();

        Ok(CoachRequest {
            audio,
            target_phrase,
        })
    }
}

/// Response payload: `transcript` plus every top-level key of the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoachResult(Map<String, Value>);

impl CoachResult {
    /// Merge the analysis over the transcript. Keys from the analysis win on
    /// collision; a non-object analysis contributes nothing.
    pub fn assemble(transcript: impl Into<String>, analysis: Value) -> Self {
        let mut fields = Map::new();
        fields.insert("transcript".to_string(), Value::String(transcript.into()));

        if let Value::Object(analysis) = analysis {
            fields.extend(analysis);
        }

        Self(fields)
    }

    pub fn transcript(&self) -> Option<&str> {
        self.0.get("transcript").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
