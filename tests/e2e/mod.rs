//! End-to-end tests for phrase-coach
//!
//! These tests call the real OpenAI API.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - OPENAI_API_KEY

pub mod coach;
