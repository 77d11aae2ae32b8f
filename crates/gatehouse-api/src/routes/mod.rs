//! Route definitions
//!
//! API routes are mounted under /api/v1; the health probe sits at the root.

use axum::{routing::{get, post}, Router};

use crate::handlers::{auth, health, monitor};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted at the root, outside /api/v1)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(monitor_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Security monitoring routes
fn monitor_routes() -> Router<AppState> {
    Router::new()
        .route("/users/count", get(monitor::account_count))
        .route("/login-attempts/:username", get(monitor::login_attempts))
        .route("/accounts/:username/lock", get(monitor::lock_status))
}
