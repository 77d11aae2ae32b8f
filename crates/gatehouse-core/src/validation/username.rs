//! Username syntax validation

use std::fmt;

/// Minimum username length in characters
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length in characters
pub const MAX_USERNAME_LENGTH: usize = 20;

/// Why a username was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameViolation {
    /// Length outside the allowed range
    Length,
    /// A character outside `[A-Za-z0-9_]`
    CharacterSet,
}

impl fmt::Display for UsernameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "Username must be between 3 and 20 characters"),
            Self::CharacterSet => write!(
                f,
                "Username can only contain letters, numbers, and underscores"
            ),
        }
    }
}

/// Validate username length and character set.
///
/// The length rule is checked first, so a one-character username with a `#`
/// in it reports the length violation.
pub fn validate_username(username: &str) -> Result<(), UsernameViolation> {
    let length = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
        return Err(UsernameViolation::Length);
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(UsernameViolation::CharacterSet);
    }
    Ok(())
}
