//! Shared field validation rules used by the registration flows.
//!
//! Every rule appends to an [`ErrorMap`] instead of short-circuiting, so a
//! single step validation surfaces all of its violations at once.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::wizard::ErrorMap;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Simple `local@domain.tld` shape check; no full RFC validation.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex is valid"));

/// Require a non-empty (trimmed) text value.
pub fn require_text(errors: &mut ErrorMap, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

/// Email is required and must match the simple address shape.
pub fn check_email(errors: &mut ErrorMap, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, "Email is required");
    } else if !EMAIL_SHAPE.is_match(value) {
        errors.insert(field, "Email is invalid");
    }
}

/// Password must be present and at least [`MIN_PASSWORD_LEN`] characters;
/// the confirmation must be present and equal to the primary.
pub fn check_password_pair(errors: &mut ErrorMap, password: &str, confirm: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }

    if confirm.is_empty() {
        errors.insert("confirm_password", "Please confirm your password");
    } else if password != confirm {
        errors.insert("confirm_password", "Passwords do not match");
    }
}

/// Parse a price field: any finite number strictly greater than zero.
/// Fractional values are accepted; no currency normalization is applied.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

/// Price field is required and must parse as a valid positive amount.
pub fn check_amount(
    errors: &mut ErrorMap,
    field: &'static str,
    raw: &str,
    required_message: &str,
    invalid_message: &str,
) {
    if raw.trim().is_empty() {
        errors.insert(field, required_message);
    } else if parse_amount(raw).is_none() {
        errors.insert(field, invalid_message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape_accepts_plain_addresses() {
        let mut errors = ErrorMap::new();
        check_email(&mut errors, "email", "a@b.com");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_shape_rejects_garbage() {
        for bad in ["not-an-email", "a@b", "a b@c.com", "@x.com"] {
            let mut errors = ErrorMap::new();
            check_email(&mut errors, "email", bad);
            assert_eq!(errors.get("email"), Some("Email is invalid"), "{bad}");
        }
    }

    #[test]
    fn test_empty_email_is_required_not_invalid() {
        let mut errors = ErrorMap::new();
        check_email(&mut errors, "email", "  ");
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_password_length_and_mismatch() {
        let mut errors = ErrorMap::new();
        check_password_pair(&mut errors, "abc12", "abc12");
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );

        let mut errors = ErrorMap::new();
        check_password_pair(&mut errors, "abc123", "xyz999");
        assert!(errors.get("password").is_none());
        assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));

        let mut errors = ErrorMap::new();
        check_password_pair(&mut errors, "abc123", "abc123");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_amount_parsing() {
        assert_eq!(parse_amount("2500"), Some(2500.0));
        assert_eq!(parse_amount(" 2500.50 "), Some(2500.5));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("ten"), None);
    }
}
