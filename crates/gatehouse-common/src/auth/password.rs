//! Password hashing and verification
//!
//! Argon2id with a per-password random salt. Digests are PHC strings, so the
//! salt and parameters travel inside the digest itself.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, AppResult};

/// Hash a password into a PHC-format digest
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("password hashing failed: {e}")))
}

/// Verify a password against a stored digest
///
/// # Errors
/// Returns an error if the stored digest cannot be parsed
pub fn verify_password(password: &str, digest: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(digest)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("malformed password digest: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Hashing collaborator for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> AppResult<String> {
        hash_password(password)
    }

    /// Verify a password against a stored digest
    ///
    /// # Errors
    /// Returns an error if the stored digest cannot be parsed
    pub fn verify(&self, password: &str, digest: &str) -> AppResult<bool> {
        verify_password(password, digest)
    }
}
