//! Login attempt database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the login_attempts table
#[derive(Debug, Clone, FromRow)]
pub struct LoginAttemptModel {
    pub id: i64,
    pub username: String,
    pub source_address: String,
    pub success: bool,
    pub attempted_at: DateTime<Utc>,
}
