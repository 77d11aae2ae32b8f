//! # gatehouse-api
//!
//! REST API server built with the Axum framework.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the server entry points for binaries and tests
pub use server::{create_app, create_app_state, create_app_with_config, run, run_server};
pub use state::AppState;
