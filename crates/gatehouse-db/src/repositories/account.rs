//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gatehouse_core::entities::Account;
use gatehouse_core::error::DomainError;
use gatehouse_core::lockout::LockoutPolicy;
use gatehouse_core::traits::{AccountRepository, RepoResult};

use crate::models::AccountModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
    lockout: LockoutPolicy,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository governed by the given lockout policy
    pub fn new(pool: PgPool, lockout: LockoutPolicy) -> Self {
        Self { pool, lockout }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self, account), fields(username = %account.username))]
    async fn create(&self, account: &Account) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO accounts (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateAccount))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, username, email, password_hash, created_at, last_login,
                   failed_login_attempts, account_locked_until
            FROM accounts
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn record_login_success(&self, username: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE accounts
            SET failed_login_attempts = 0,
                account_locked_until = NULL,
                last_login = now()
            WHERE username = $1
            ",
        )
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_login_failure(&self, username: &str) -> RepoResult<i32> {
        // Increment and lock decision in one statement so concurrent
        // failures cannot lose updates and the threshold increment always
        // sets the lock.
        let new_count = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE accounts
            SET failed_login_attempts = failed_login_attempts + 1,
                account_locked_until = CASE
                    WHEN failed_login_attempts + 1 >= $2
                        THEN now() + make_interval(mins => $3)
                    ELSE account_locked_until
                END
            WHERE username = $1
            RETURNING failed_login_attempts
            ",
        )
        .bind(username)
        .bind(self.lockout.max_failed_attempts())
        .bind(self.lockout.lockout_duration().num_minutes() as i32)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Unknown username: nothing to increment
        Ok(new_count.unwrap_or(0))
    }

    #[instrument(skip(self))]
    async fn clear_expired_lock(&self, username: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE accounts
            SET failed_login_attempts = 0,
                account_locked_until = NULL
            WHERE username = $1
              AND account_locked_until IS NOT NULL
              AND account_locked_until <= now()
            ",
        )
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
