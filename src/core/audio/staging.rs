//! Request-scoped temporary audio files

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

use super::types::extension_for;

pub const STAGED_FILE_PREFIX: &str = "coach-audio-";

/// Unique file name for one staged upload: prefix, random v4 UUID, original extension
pub fn staged_file_name(original_name: Option<&str>) -> String {
    format!(
        "{}{}{}",
        STAGED_FILE_PREFIX,
        Uuid::new_v4(),
        extension_for(original_name)
    )
}

/// Audio written to disk for the duration of one request.
///
/// The file is owned exclusively by this value and removed when it is dropped,
/// whichever way the request ends. Removal failures are logged and ignored.
#[derive(Debug)]
pub struct StagedAudio {
    path: PathBuf,
}

impl StagedAudio {
    /// Write `bytes` to a fresh file in `dir`.
    pub async fn write(dir: &Path, original_name: Option<&str>, bytes: &[u8]) -> io::Result<Self> {
        // Constructed before the write so a partial file is cleaned up on error.
        let staged = Self {
            path: dir.join(staged_file_name(original_name)),
        };
        tokio::fs::write(&staged.path, bytes).await?;
        debug!(path = %staged.path.display(), bytes = bytes.len(), "Staged audio upload");
        Ok(staged)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed staged audio"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove staged audio"),
        }
    }
}
