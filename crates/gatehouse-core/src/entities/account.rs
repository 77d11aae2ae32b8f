//! Account entity - a registered user and its security counters

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account.
///
/// `failed_login_attempts` and `account_locked_until` move together: the
/// counter resets to zero exactly when the lock timestamp is cleared, and
/// both reset on any successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    /// Unique, immutable after creation
    pub username: String,
    pub email: String,
    /// Salted one-way digest; never stored or logged in clear text
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub failed_login_attempts: i32,
    /// While set and in the future, authentication is refused regardless of
    /// credential correctness
    pub account_locked_until: Option<DateTime<Utc>>,
}

impl Account {
    /// Create a fresh account with zeroed security counters
    pub fn new(id: Uuid, username: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at: Utc::now(),
            last_login: None,
            failed_login_attempts: 0,
            account_locked_until: None,
        }
    }
}
