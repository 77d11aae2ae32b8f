//! PostgreSQL implementation of LoginAttemptRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gatehouse_core::entities::{LoginAttempt, NewLoginAttempt};
use gatehouse_core::traits::{LoginAttemptRepository, RepoResult};

use crate::models::LoginAttemptModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LoginAttemptRepository
#[derive(Clone)]
pub struct PgLoginAttemptRepository {
    pool: PgPool,
}

impl PgLoginAttemptRepository {
    /// Create a new PgLoginAttemptRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoginAttemptRepository for PgLoginAttemptRepository {
    #[instrument(skip(self, attempt), fields(username = %attempt.username, success = attempt.success))]
    async fn record(&self, attempt: &NewLoginAttempt<'_>) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO login_attempts (username, source_address, success)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(attempt.username)
        .bind(attempt.source_address)
        .bind(attempt.success)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_for_username(&self, username: &str, limit: i64) -> RepoResult<Vec<LoginAttempt>> {
        let rows = sqlx::query_as::<_, LoginAttemptModel>(
            r"
            SELECT id, username, source_address, success, attempted_at
            FROM login_attempts
            WHERE username = $1
            ORDER BY attempted_at DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(username)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(LoginAttempt::from).collect())
    }
}
