//! Test fixtures and data generators
//!
//! Reusable test data plus the wire-format structs the API speaks.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use gatehouse_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig,
};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Configuration for in-process test servers. The database URL is never
/// dialed; tests run against in-memory repositories.
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "gatehouse-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgresql://unused-in-tests".to_string(),
            max_connections: 1,
            min_connections: 0,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    }
}

// ============================================================================
// Request bodies
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self::named(&format!("testuser{suffix}"))
    }

    pub fn named(username: &str) -> Self {
        Self {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "TestPass123!".to_string(),
            confirm_password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }

    pub fn wrong_password(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: "WrongPass123!".to_string(),
        }
    }
}

// ============================================================================
// Response bodies
// ============================================================================

/// Registration response
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub account_id: String,
    pub message: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub outcome: String,
    pub message: String,
}

/// Health response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Account count response
#[derive(Debug, Deserialize)]
pub struct AccountCountResponse {
    pub user_count: i64,
}

/// One audited login attempt
#[derive(Debug, Deserialize)]
pub struct LoginAttemptRecord {
    pub username: String,
    pub source_address: String,
    pub success: bool,
}

/// Lock status response
#[derive(Debug, Deserialize)]
pub struct LockStatusResponse {
    pub username: String,
    pub locked: bool,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
