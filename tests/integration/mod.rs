//! Integration tests for phrase-coach
//!
//! Each test mounts the production routing through `HttpServer::create_app`.

pub mod error_body_tests;
