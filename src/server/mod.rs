//! HTTP server implementation
//!
//! Routing, shared state, and the server lifecycle.

pub mod routes;
pub mod server;
pub mod state;
mod utils;

pub use server::{HttpServer, SERVER_HEADER};
pub use state::AppState;
