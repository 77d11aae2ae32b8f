//! Input validators - pure syntactic checks for account data
//!
//! Each validator evaluates its rules in a fixed order and reports only the
//! first violation. The reason strings are part of the observable contract.

mod email;
mod password;
mod username;

pub use email::validate_email;
pub use password::{validate_password, PasswordViolation, SPECIAL_CHARACTERS};
pub use username::{validate_username, UsernameViolation};
