//! Utility modules for the coaching service
//!
//! - **error**: the error taxonomy and its HTTP mapping
//! - **logging**: subscriber setup and log sanitization

pub mod error;
pub mod logging;
