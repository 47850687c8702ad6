//! # phrase-coach
//!
//! Pronunciation coaching over HTTP. A client posts a recording of itself saying
//! a target phrase; the service transcribes the recording, asks a chat model for
//! structured feedback, and returns the transcript merged into that feedback.
//!
//! ## Endpoints
//!
//! - `POST /api/coach`: multipart form with `audio` (file) and `targetPhrase` (text)
//! - `GET /healthz`: liveness probe, `{"ok": true}`
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use phrase_coach::{CoachConfig, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CoachConfig::default();
//!     config.validate()?;
//!     HttpServer::new(config)?.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::CoachConfig;
pub use core::coach::{CoachRequest, CoachResult, CoachService};
pub use core::providers::{Analyzer, ProviderError, Transcriber};
pub use server::{AppState, HttpServer};
pub use utils::error::{CoachError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
