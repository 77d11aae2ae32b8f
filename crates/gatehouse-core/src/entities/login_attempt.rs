//! Login attempt audit record

use chrono::{DateTime, Utc};

/// Append-only record of one login attempt.
///
/// `username` is stored as submitted and need not reference an existing
/// account - failed lookups are recorded too. Records are never updated or
/// deleted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub id: i64,
    pub username: String,
    pub source_address: String,
    pub success: bool,
    pub attempted_at: DateTime<Utc>,
}

/// Borrowed values for inserting a new attempt
#[derive(Debug, Clone, Copy)]
pub struct NewLoginAttempt<'a> {
    pub username: &'a str,
    pub source_address: &'a str,
    pub success: bool,
}
