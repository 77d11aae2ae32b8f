//! Response DTOs for serializing API outputs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use gatehouse_core::entities::LoginAttempt;

use crate::services::LoginOutcome;

/// Successful registration response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub account_id: Uuid,
    pub message: String,
}

impl RegisterResponse {
    pub fn new(account_id: Uuid) -> Self {
        Self {
            account_id,
            message: "Registration successful! Please log in.".to_string(),
        }
    }
}

/// Login response carrying the tri-state outcome.
///
/// The invalid-credentials message is shared by "wrong password" and "no
/// such user" so callers cannot probe for existing usernames.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub outcome: LoginOutcome,
    pub message: String,
}

impl LoginResponse {
    pub fn from_outcome(outcome: LoginOutcome) -> Self {
        let message = match outcome {
            LoginOutcome::Success => "Login successful!",
            LoginOutcome::InvalidCredentials => "Invalid username or password",
            LoginOutcome::Locked => {
                "Account is temporarily locked due to multiple failed login attempts. \
                 Please try again later."
            }
        };
        Self {
            outcome,
            message: message.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Total registered accounts, for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct AccountCountResponse {
    pub user_count: i64,
}

/// One audited login attempt, for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct LoginAttemptResponse {
    pub username: String,
    pub source_address: String,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<LoginAttempt> for LoginAttemptResponse {
    fn from(attempt: LoginAttempt) -> Self {
        Self {
            username: attempt.username,
            source_address: attempt.source_address,
            success: attempt.success,
            timestamp: attempt.attempted_at,
        }
    }
}

/// Current lock state of an account, for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct LockStatusResponse {
    pub username: String,
    pub locked: bool,
}
