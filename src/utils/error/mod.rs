//! Error handling for the coaching service
//!
//! Every failure a caller can observe is a [`CoachError`]; the HTTP mapping lives in
//! `response`, the convenience constructors in `helpers`.

mod helpers;
mod response;
mod types;

pub use response::ErrorBody;
pub use types::{CoachError, Result};
