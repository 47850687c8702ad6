//! Error type definitions

use thiserror::Error;

/// Result type alias for the coaching service
pub type Result<T> = std::result::Result<T, CoachError>;

/// Main error type for the coaching service
///
/// The `Display` text of the request-facing variants is the user-facing message
/// returned in the `error` field of the JSON body.
#[derive(Error, Debug)]
pub enum CoachError {
    /// Anything other than POST on the coaching endpoint
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// No provider credential configured
    #[error("OPENAI_API_KEY が未設定です。.env を作成してください。")]
    ConfigurationMissing,

    /// The multipart body could not be decoded
    #[error("multipart フォームの解析に失敗しました。")]
    MalformedRequest(String),

    /// No usable audio part in the form
    #[error("audio ファイルが見つかりません。")]
    MissingAudio,

    /// Target phrase absent or blank after trimming
    #[error("targetPhrase が空です。")]
    MissingPhrase,

    /// Audio part exceeded the configured upload limit
    #[error("audio ファイルが大きすぎます。")]
    AudioTooLarge { limit: usize },

    /// Speech-to-text provider failed
    #[error("文字起こしに失敗しました。")]
    TranscriptionFailed { detail: String, hint: String },

    /// Text-generation provider failed
    #[error("AI分析に失敗しました。")]
    AnalysisFailed { detail: String, raw: String },

    /// Text-generation output was not valid JSON
    #[error("分析JSONの解析に失敗しました。")]
    AnalysisParseFailed { raw: String },

    /// Configuration errors found at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server lifecycle errors (bind, run)
    #[error("Server error: {0}")]
    Server(String),
}
