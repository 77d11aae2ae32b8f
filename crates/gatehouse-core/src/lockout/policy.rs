//! Lockout policy - decides when an account may attempt authentication
//!
//! An account moves OPEN -> LOCKED on the failure that brings its counter to
//! the threshold, and LOCKED -> OPEN lazily: expiry is evaluated on the next
//! check, never by a timer.

use chrono::{DateTime, Duration, Utc};

/// Consecutive failed logins that trigger a lock
pub const DEFAULT_MAX_FAILED_ATTEMPTS: i32 = 5;

/// How long a triggered lock lasts, in minutes
pub const DEFAULT_LOCKOUT_MINUTES: i64 = 30;

/// Lock state of an account at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// No active lock; authentication may proceed
    Open,
    /// Lock timestamp in the future; authentication is refused
    Locked,
    /// Lock timestamp elapsed; lock and counter must be cleared before
    /// treating the account as open
    ExpiredLock,
}

/// Lockout policy parameters
#[derive(Debug, Clone)]
pub struct LockoutPolicy {
    max_failed_attempts: i32,
    lockout_duration: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_failed_attempts: DEFAULT_MAX_FAILED_ATTEMPTS,
            lockout_duration: Duration::minutes(DEFAULT_LOCKOUT_MINUTES),
        }
    }
}

impl LockoutPolicy {
    /// Create a policy with custom threshold and duration
    pub fn new(max_failed_attempts: i32, lockout_duration: Duration) -> Self {
        Self {
            max_failed_attempts,
            lockout_duration,
        }
    }

    /// Failure count at which an account locks
    pub fn max_failed_attempts(&self) -> i32 {
        self.max_failed_attempts
    }

    /// Duration of a triggered lock
    pub fn lockout_duration(&self) -> Duration {
        self.lockout_duration
    }

    /// Whether a failure count has reached the lock threshold
    pub fn locks_at(&self, failed_attempts: i32) -> bool {
        failed_attempts >= self.max_failed_attempts
    }

    /// Expiry timestamp for a lock triggered at `now`
    pub fn lock_until(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.lockout_duration
    }

    /// Classify an account's lock timestamp relative to `now`
    pub fn classify(&self, locked_until: Option<DateTime<Utc>>, now: DateTime<Utc>) -> LockState {
        match locked_until {
            None => LockState::Open,
            Some(until) if now < until => LockState::Locked,
            Some(_) => LockState::ExpiredLock,
        }
    }
}
