//! Audio format helpers

use std::path::Path;

/// Extension used when the upload carries no usable one (browser recordings are webm)
pub const DEFAULT_EXTENSION: &str = ".webm";

/// Extension of `filename` including the leading dot, or [`DEFAULT_EXTENSION`].
///
/// Only short alphanumeric extensions are kept so the staged path never picks up
/// separators or other surprises from a client-supplied name.
pub fn extension_for(filename: Option<&str>) -> String {
    filename
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 10)
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Content type to send with the audio part, from an extension with or without dot
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.trim_start_matches('.').to_lowercase().as_str() {
        "webm" => "audio/webm",
        "mp3" | "mpga" | "mpeg" => "audio/mpeg",
        "mp4" | "m4a" => "audio/mp4",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}
