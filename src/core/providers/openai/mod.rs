//! OpenAI provider
//!
//! Speech-to-text through `/audio/transcriptions` and JSON-constrained analysis
//! through `/chat/completions`, against any OpenAI-compatible base URL.

mod client;
mod types;

pub use client::OpenAIClient;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
    TranscriptionResponse,
};
