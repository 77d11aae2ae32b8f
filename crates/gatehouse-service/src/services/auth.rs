//! Authentication service
//!
//! Orchestrates validators, the credential store, and the lockout policy to
//! answer "can this (username, password) pair log in right now" and to gate
//! registration.

use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use gatehouse_core::entities::{Account, LoginAttempt, NewLoginAttempt};
use gatehouse_core::error::DomainError;
use gatehouse_core::lockout::LockState;
use gatehouse_core::validation::{validate_email, validate_password, validate_username};
use serde::Serialize;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default number of attempts returned by the monitoring surface
pub const DEFAULT_ATTEMPT_LIMIT: i64 = 10;

/// Tri-state authentication outcome.
///
/// `InvalidCredentials` covers both "wrong password" and "no such account";
/// the two must stay indistinguishable to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginOutcome {
    Success,
    InvalidCredentials,
    Locked,
}

/// Why a registration was refused.
///
/// Checks run in a fixed order (presence, username, email, password,
/// confirmation, uniqueness) and the first failure wins, so inputs that
/// violate several rules report the earliest one.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("All fields are required")]
    MissingField,

    #[error("{0}")]
    InvalidUsername(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("{0}")]
    InvalidPassword(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username or email already exists")]
    DuplicateUsernameOrEmail,

    /// Storage or hashing failure; the message deliberately carries no
    /// driver detail
    #[error("Registration failed. Please try again.")]
    Storage(#[source] DomainError),
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account.
    ///
    /// Returns the new account id, or the first failed check in the fixed
    /// validation order.
    #[instrument(skip(self, password, confirm_password), fields(username = %username))]
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Uuid, RegistrationError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(RegistrationError::MissingField);
        }

        validate_username(username)
            .map_err(|v| RegistrationError::InvalidUsername(v.to_string()))?;

        if !validate_email(email) {
            return Err(RegistrationError::InvalidEmail);
        }

        validate_password(password)
            .map_err(|v| RegistrationError::InvalidPassword(v.to_string()))?;

        if password != confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }

        let password_hash = self.ctx.passwords().hash(password).map_err(|e| {
            warn!(error = %e, "password hashing failed during registration");
            RegistrationError::Storage(DomainError::InternalError(
                "password hashing failed".to_string(),
            ))
        })?;

        let account = Account::new(
            Uuid::new_v4(),
            username.to_string(),
            email.to_string(),
            password_hash,
        );

        // Uniqueness is enforced by the store's atomic check-and-insert, so
        // concurrent duplicates race to a single winner.
        match self.ctx.accounts().create(&account).await {
            Ok(()) => {
                info!(account_id = %account.id, "new user registered");
                Ok(account.id)
            }
            Err(DomainError::DuplicateAccount) => Err(RegistrationError::DuplicateUsernameOrEmail),
            Err(e) => {
                warn!(error = %e, "storage failure during registration");
                Err(RegistrationError::Storage(e))
            }
        }
    }

    /// Authenticate a (username, password) pair.
    ///
    /// Every call that reaches the lock check is audited, success or
    /// failure; empty inputs short-circuit without an audit record.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
        source_address: &str,
    ) -> ServiceResult<LoginOutcome> {
        // Client input error, not a credential check: nothing is logged
        if username.is_empty() || password.is_empty() {
            return Ok(LoginOutcome::InvalidCredentials);
        }

        if self.is_locked(username).await? {
            self.record_attempt(username, source_address, false).await;
            return Ok(LoginOutcome::Locked);
        }

        let Some(account) = self.ctx.accounts().find_by_username(username).await? else {
            // Unknown username: nothing to increment, but the attempt is
            // audited and the outcome matches a wrong password exactly.
            self.record_attempt(username, source_address, false).await;
            return Ok(LoginOutcome::InvalidCredentials);
        };

        let matches = self
            .ctx
            .passwords()
            .verify(password, &account.password_hash)?;

        if !matches {
            let failures = self.ctx.accounts().record_login_failure(username).await?;
            warn!(failures, "failed login attempt");
            self.record_attempt(username, source_address, false).await;
            return Ok(LoginOutcome::InvalidCredentials);
        }

        self.ctx.accounts().record_login_success(username).await?;
        self.record_attempt(username, source_address, true).await;
        info!("user logged in");
        Ok(LoginOutcome::Success)
    }

    /// Check whether an account is currently locked.
    ///
    /// Lazy unlock: an elapsed lock is cleared here, as a side effect of the
    /// check, and the account is treated as open from then on. A username
    /// with no account is never locked.
    #[instrument(skip(self))]
    pub async fn is_locked(&self, username: &str) -> ServiceResult<bool> {
        let Some(account) = self.ctx.accounts().find_by_username(username).await? else {
            return Ok(false);
        };

        match self
            .ctx
            .lockout_policy()
            .classify(account.account_locked_until, chrono::Utc::now())
        {
            LockState::Locked => Ok(true),
            LockState::ExpiredLock => {
                self.ctx.accounts().clear_expired_lock(username).await?;
                info!("expired lock cleared");
                Ok(false)
            }
            LockState::Open => Ok(false),
        }
    }

    /// List recent login attempts for a username, newest first
    #[instrument(skip(self))]
    pub async fn list_attempts(
        &self,
        username: &str,
        limit: i64,
    ) -> ServiceResult<Vec<LoginAttempt>> {
        Ok(self.ctx.attempts().list_for_username(username, limit).await?)
    }

    /// Total number of registered accounts
    #[instrument(skip(self))]
    pub async fn count_accounts(&self) -> ServiceResult<i64> {
        Ok(self.ctx.accounts().count().await?)
    }

    /// Append an audit record, swallowing persistence failures: audit
    /// logging must never block or fail the login outcome.
    async fn record_attempt(&self, username: &str, source_address: &str, success: bool) {
        let attempt = NewLoginAttempt {
            username,
            source_address,
            success,
        };
        if let Err(e) = self.ctx.attempts().record(&attempt).await {
            warn!(error = %e, "failed to persist login attempt");
        }
    }
}
