//! Password strength validation
//!
//! Rules are evaluated in a fixed order and only the first failing rule is
//! reported, even when a password violates several at once.

use std::fmt;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Why a password was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

impl fmt::Display for PasswordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Password must be at least 8 characters long"),
            Self::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            Self::MissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            Self::MissingDigit => write!(f, "Password must contain at least one digit"),
            Self::MissingSpecial => {
                write!(f, "Password must contain at least one special character")
            }
        }
    }
}

fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Ordered rule table. The order is part of the observable contract:
/// length, uppercase, lowercase, digit, special.
const RULES: [(fn(&str) -> bool, PasswordViolation); 5] = [
    (has_min_length, PasswordViolation::TooShort),
    (has_uppercase, PasswordViolation::MissingUppercase),
    (has_lowercase, PasswordViolation::MissingLowercase),
    (has_digit, PasswordViolation::MissingDigit),
    (has_special, PasswordViolation::MissingSpecial),
];

/// Validate password strength, reporting the first failing rule
pub fn validate_password(password: &str) -> Result<(), PasswordViolation> {
    for (rule, violation) in RULES {
        if !rule(password) {
            return Err(violation);
        }
    }
    Ok(())
}
