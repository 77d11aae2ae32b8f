//! In-memory implementation of AccountRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use gatehouse_core::entities::Account;
use gatehouse_core::error::DomainError;
use gatehouse_core::lockout::LockoutPolicy;
use gatehouse_core::traits::{AccountRepository, RepoResult};

/// In-memory implementation of AccountRepository, keyed by username
#[derive(Default)]
pub struct MemoryAccountRepository {
    accounts: Mutex<HashMap<String, Account>>,
    lockout: LockoutPolicy,
}

impl MemoryAccountRepository {
    /// Create an empty repository governed by the given lockout policy
    pub fn new(lockout: LockoutPolicy) -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            lockout,
        }
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn create(&self, account: &Account) -> RepoResult<()> {
        let mut accounts = self.accounts.lock();

        // Uniqueness check and insert under one lock, so concurrent
        // duplicate registrations see exactly one winner.
        let taken = accounts
            .values()
            .any(|a| a.username == account.username || a.email == account.email);
        if taken {
            return Err(DomainError::DuplicateAccount);
        }

        accounts.insert(account.username.clone(), account.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        Ok(self.accounts.lock().get(username).cloned())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.accounts.lock().len() as i64)
    }

    async fn record_login_success(&self, username: &str) -> RepoResult<()> {
        if let Some(account) = self.accounts.lock().get_mut(username) {
            account.failed_login_attempts = 0;
            account.account_locked_until = None;
            account.last_login = Some(Utc::now());
        }
        Ok(())
    }

    async fn record_login_failure(&self, username: &str) -> RepoResult<i32> {
        let mut accounts = self.accounts.lock();

        let Some(account) = accounts.get_mut(username) else {
            // Unknown username: nothing to increment
            return Ok(0);
        };

        account.failed_login_attempts += 1;
        if self.lockout.locks_at(account.failed_login_attempts) {
            account.account_locked_until = Some(self.lockout.lock_until(Utc::now()));
        }
        Ok(account.failed_login_attempts)
    }

    async fn clear_expired_lock(&self, username: &str) -> RepoResult<()> {
        let mut accounts = self.accounts.lock();

        if let Some(account) = accounts.get_mut(username) {
            match account.account_locked_until {
                Some(until) if until <= Utc::now() => {
                    account.account_locked_until = None;
                    account.failed_login_attempts = 0;
                }
                // Active locks and unlocked accounts are left untouched
                _ => {}
            }
        }
        Ok(())
    }
}
