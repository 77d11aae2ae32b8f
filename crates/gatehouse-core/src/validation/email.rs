//! Email syntax validation

use std::sync::OnceLock;

use regex::Regex;

/// `local@domain.tld` where local is one-or-more of `[A-Za-z0-9._%+-]`,
/// domain is one-or-more of `[A-Za-z0-9.-]`, and the final label is two or
/// more letters.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Validate email format.
///
/// Deliberately permissive where the pattern is: consecutive dots inside the
/// domain still match through backtracking (`user@example..com` passes).
/// Callers depend on this exact behavior; do not tighten the pattern.
pub fn validate_email(email: &str) -> bool {
    let regex =
        EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"));
    regex.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid = [
            "user@example.com",
            "test.email@domain.co.uk",
            "user+tag@example.org",
            "firstname.lastname@company.com",
            "user123@test-domain.com",
        ];
        for email in valid {
            assert!(validate_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid = [
            "",                     // empty
            "invalid",              // no @ symbol
            "@example.com",         // no local part
            "user@",                // no domain
            "user@.com",            // no domain label before the TLD
            "user@example",         // no TLD
            "user@example.c",       // TLD shorter than two letters
            "user name@example.com", // space in local part
            "user@exam ple.com",    // space in domain
            "user@@example.com",    // double @
        ];
        for email in invalid {
            assert!(!validate_email(email), "{email:?} should be invalid");
        }
    }

    #[test]
    fn test_permissiveness_is_preserved() {
        // The pattern reaches these through backtracking; the behavior is
        // pinned, not a bug to fix.
        assert!(validate_email("user@example..com"));
        assert!(validate_email("user@-.com"));
    }
}
