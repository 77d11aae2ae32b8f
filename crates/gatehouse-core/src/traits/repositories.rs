//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Implementations must uphold the atomicity
//! notes on each method even under concurrent callers.

use async_trait::async_trait;

use crate::entities::{Account, LoginAttempt, NewLoginAttempt};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Create a new account.
    ///
    /// The uniqueness check and the insert are a single atomic step: under
    /// concurrent creation with the same username or email, at most one call
    /// succeeds and the rest observe [`DomainError::DuplicateAccount`].
    async fn create(&self, account: &Account) -> RepoResult<()>;

    /// Find an account by username (case-sensitive)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>>;

    /// Total number of registered accounts
    async fn count(&self) -> RepoResult<i64>;

    /// Record a successful login: zero the failure counter, clear the lock
    /// timestamp, and stamp `last_login`, all in one update.
    async fn record_login_success(&self, username: &str) -> RepoResult<()>;

    /// Record a failed login and return the new failure count.
    ///
    /// The increment and the lock decision happen in one atomic update per
    /// account row: concurrent failures must not lose increments, and the
    /// increment that reaches the threshold reliably sets the lock
    /// timestamp. Unknown usernames update nothing and report 0.
    async fn record_login_failure(&self, username: &str) -> RepoResult<i32>;

    /// Clear an expired lock: reset the lock timestamp and failure counter,
    /// but only when the stored timestamp is in the past. A no-op for
    /// unlocked accounts and for locks still in force.
    async fn clear_expired_lock(&self, username: &str) -> RepoResult<()>;
}

// ============================================================================
// Login Attempt Repository
// ============================================================================

#[async_trait]
pub trait LoginAttemptRepository: Send + Sync {
    /// Append one attempt record. Never updates or deletes existing rows.
    async fn record(&self, attempt: &NewLoginAttempt<'_>) -> RepoResult<()>;

    /// List attempts for a username, newest first, up to `limit` records.
    /// Unknown usernames yield an empty list, not an error.
    async fn list_for_username(&self, username: &str, limit: i64) -> RepoResult<Vec<LoginAttempt>>;
}
