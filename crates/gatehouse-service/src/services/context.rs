//! Service context - dependency container for services
//!
//! Holds the repositories, the hashing collaborator, and the lockout policy.
//! Constructed once at process start and passed explicitly; there is no
//! ambient singleton.

use std::sync::Arc;

use gatehouse_common::auth::PasswordService;
use gatehouse_core::lockout::LockoutPolicy;
use gatehouse_core::traits::{AccountRepository, LoginAttemptRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    accounts: Arc<dyn AccountRepository>,
    attempts: Arc<dyn LoginAttemptRepository>,
    passwords: PasswordService,
    lockout: LockoutPolicy,
}

impl ServiceContext {
    /// Create a context with the default lockout policy
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        attempts: Arc<dyn LoginAttemptRepository>,
    ) -> Self {
        Self {
            accounts,
            attempts,
            passwords: PasswordService::new(),
            lockout: LockoutPolicy::default(),
        }
    }

    /// Override the lockout policy.
    ///
    /// The policy must match the one the account repository was built with,
    /// otherwise the service and the store disagree about thresholds.
    pub fn with_lockout_policy(mut self, lockout: LockoutPolicy) -> Self {
        self.lockout = lockout;
        self
    }

    /// Get the account repository
    pub fn accounts(&self) -> &dyn AccountRepository {
        self.accounts.as_ref()
    }

    /// Get the login attempt repository
    pub fn attempts(&self) -> &dyn LoginAttemptRepository {
        self.attempts.as_ref()
    }

    /// Get the hashing collaborator
    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }

    /// Get the lockout policy
    pub fn lockout_policy(&self) -> &LockoutPolicy {
        &self.lockout
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("accounts", &"AccountRepository")
            .field("attempts", &"LoginAttemptRepository")
            .field("lockout", &self.lockout)
            .finish()
    }
}
