//! In-memory implementation of LoginAttemptRepository

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use gatehouse_core::entities::{LoginAttempt, NewLoginAttempt};
use gatehouse_core::traits::{LoginAttemptRepository, RepoResult};

/// In-memory implementation of LoginAttemptRepository.
///
/// Appends to a vec in arrival order; listing walks it backwards so
/// newest-first ordering holds even when timestamps collide.
#[derive(Default)]
pub struct MemoryLoginAttemptRepository {
    attempts: Mutex<Vec<LoginAttempt>>,
}

impl MemoryLoginAttemptRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoginAttemptRepository for MemoryLoginAttemptRepository {
    async fn record(&self, attempt: &NewLoginAttempt<'_>) -> RepoResult<()> {
        let mut attempts = self.attempts.lock();
        let id = attempts.len() as i64 + 1;
        attempts.push(LoginAttempt {
            id,
            username: attempt.username.to_string(),
            source_address: attempt.source_address.to_string(),
            success: attempt.success,
            attempted_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_for_username(&self, username: &str, limit: i64) -> RepoResult<Vec<LoginAttempt>> {
        let attempts = self.attempts.lock();
        Ok(attempts
            .iter()
            .rev()
            .filter(|a| a.username == username)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}
