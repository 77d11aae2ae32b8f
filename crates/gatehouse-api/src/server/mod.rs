//! Server setup and initialization
//!
//! Provides the main application builder and server runner. The repository
//! handles are constructed once here and injected into the service context;
//! nothing else in the process holds a store handle.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use gatehouse_common::{AppConfig, AppError};
use gatehouse_core::LockoutPolicy;
use gatehouse_db::{create_pool, PgAccountRepository, PgLoginAttemptRepository};
use gatehouse_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the Axum application with the base middleware stack.
///
/// Used directly by tests that inject their own repositories via
/// [`AppState`]; production startup goes through [`create_app_with_config`].
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the Axum application with rate limiting and configured CORS
pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware_with_config(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = gatehouse_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // The store and the service share one lockout policy
    let lockout = LockoutPolicy::default();
    let accounts = Arc::new(PgAccountRepository::new(pool.clone(), lockout.clone()));
    let attempts = Arc::new(PgLoginAttemptRepository::new(pool));

    let service_context = ServiceContext::new(accounts, attempts).with_lockout_policy(lockout);

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    // Connect info feeds the source address recorded with every login
    // attempt
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config
        .server
        .address()
        .parse::<SocketAddr>()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    // Create app state
    let state = create_app_state(config.clone()).await?;

    // Build application
    let app = create_app_with_config(state, &config);

    // Run server
    run_server(app, addr).await
}
