//! Field validators
//!
//! Pure functions checking field shape, numeric and date semantics, and
//! cross-field rules. All monetary values use `rust_decimal` for exact
//! fixed-point arithmetic; nothing here round-trips through binary
//! floating point.
//!
//! # Validation Rules
//!
//! - Strings must be non-empty and within their per-field maximum length
//! - Emails must match `local@domain.tld` with an ASCII local part,
//!   a dotted domain, and an alphabetic TLD of at least two characters
//! - Amounts must be non-negative and are coerced to two fractional digits
//! - Dates use the strict `YYYY-MM-DD` calendar format
//! - Date ranges must satisfy `start < end`

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::CoreError;

/// Validates that a string field is non-empty and within `max_len` characters
///
/// # Arguments
///
/// * `value` - The field value to check
/// * `field` - Field name used in the error message
/// * `max_len` - Maximum number of characters allowed
pub fn validate_string(value: &str, field: &str, max_len: usize) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::invalid_input(format!(
            "{field} must be a non-empty string"
        )));
    }
    if value.chars().count() > max_len {
        return Err(CoreError::invalid_input(format!(
            "{field} must not exceed {max_len} characters"
        )));
    }
    Ok(())
}

/// Validates an email address against the `local@domain.tld` pattern
///
/// The local part accepts ASCII alphanumerics plus `. _ % + -`; the domain
/// accepts alphanumerics plus `. -` and must contain at least one dot; the
/// TLD must be alphabetic with two or more characters.
pub fn validate_email(value: &str) -> Result<(), CoreError> {
    if !email_matches(value) {
        return Err(CoreError::invalid_input("Invalid email format"));
    }
    Ok(())
}

fn email_matches(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'%' | b'+' | b'-'))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty()
        || !host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-'))
    {
        return false;
    }
    tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Validates a monetary amount and coerces it to two fractional digits
///
/// # Returns
///
/// The amount rescaled to scale 2, or InvalidInput if negative
pub fn validate_amount(value: Decimal) -> Result<Decimal, CoreError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CoreError::invalid_input("Amount must be non-negative"));
    }
    Ok(value.round_dp(2))
}

/// Parses a strict `YYYY-MM-DD` calendar date
pub fn validate_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CoreError::invalid_input("Invalid date format. Use YYYY-MM-DD"))
}

/// Validates that a period's start date is strictly before its end date
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    if start >= end {
        return Err(CoreError::invalid_input(
            "End date must be after start date",
        ));
    }
    Ok(())
}
