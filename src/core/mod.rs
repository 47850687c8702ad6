//! Core functionality of the coaching service
//!
//! Audio staging, the provider capabilities, and the coaching flow that ties them
//! together. Nothing in here knows about HTTP.

pub mod audio;
pub mod coach;
pub mod providers;
