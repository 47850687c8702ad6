//! Application state shared across HTTP handlers

use crate::config::CoachConfig;
use crate::core::coach::CoachService;
use crate::core::providers::{Analyzer, Transcriber};
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything in here is immutable after startup; workers clone the `Arc`s.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process configuration (shared read-only)
    pub config: Arc<CoachConfig>,
    /// Coaching flow bound to its providers
    pub coach: Arc<CoachService>,
}

impl AppState {
    /// Build the state from a configuration and the two provider capabilities
    pub fn new(
        config: CoachConfig,
        transcriber: Arc<dyn Transcriber>,
        analyzer: Arc<dyn Analyzer>,
    ) -> Self {
        let config = Arc::new(config);
        let coach = Arc::new(CoachService::new(transcriber, analyzer, config.clone()));
        Self { config, coach }
    }

    /// Upload limit for the audio part, in bytes
    pub fn upload_limit(&self) -> usize {
        self.config.server.upload_limit_bytes
    }
}
