//! Common test utilities for phrase-coach

pub mod assertions;
pub mod fixtures;
pub mod providers;

pub use assertions::{assert_error_body, assert_no_staged_files};
pub use fixtures::{MultipartBody, app_state, coach_request, configured, unconfigured};
pub use providers::{StubAnalyzer, StubTranscriber};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
