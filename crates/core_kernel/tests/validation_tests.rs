//! Comprehensive tests for the field validators

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::validation::{
    validate_amount, validate_date, validate_date_range, validate_email, validate_string,
};
use core_kernel::CoreError;

mod string_tests {
    use super::*;

    #[test]
    fn test_accepts_value_within_limit() {
        assert!(validate_string("Alice", "Name", 100).is_ok());
    }

    #[test]
    fn test_rejects_empty_string() {
        let err = validate_string("", "Name", 100).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.message(), "Name must be a non-empty string");
    }

    #[test]
    fn test_rejects_over_long_string() {
        let err = validate_string(&"x".repeat(101), "Name", 100).unwrap_err();
        assert_eq!(err.message(), "Name must not exceed 100 characters");
    }

    #[test]
    fn test_accepts_string_at_exact_limit() {
        assert!(validate_string(&"x".repeat(100), "Name", 100).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Five multi-byte characters are within a limit of five
        assert!(validate_string("ééééé", "Name", 5).is_ok());
    }
}

mod email_tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(validate_email("alice@example.com").is_ok());
    }

    #[test]
    fn test_accepts_subdomain_and_plus_tag() {
        assert!(validate_email("a.b+tag%x_y-z@mail.example.co").is_ok());
    }

    #[test]
    fn test_rejects_missing_at_sign() {
        assert_eq!(
            validate_email("alice.example.com").unwrap_err().message(),
            "Invalid email format"
        );
    }

    #[test]
    fn test_rejects_missing_tld() {
        assert!(validate_email("alice@example").is_err());
    }

    #[test]
    fn test_rejects_short_tld() {
        assert!(validate_email("alice@example.c").is_err());
    }

    #[test]
    fn test_rejects_numeric_tld() {
        assert!(validate_email("alice@example.c0m").is_err());
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_rejects_unicode_local_part() {
        assert!(validate_email("àlice@example.com").is_err());
    }
}

mod amount_tests {
    use super::*;

    #[test]
    fn test_accepts_zero() {
        assert_eq!(validate_amount(dec!(0)).unwrap(), dec!(0));
    }

    #[test]
    fn test_rejects_negative() {
        let err = validate_amount(dec!(-0.01)).unwrap_err();
        assert_eq!(err.message(), "Amount must be non-negative");
    }

    #[test]
    fn test_coerces_to_two_fractional_digits() {
        assert_eq!(validate_amount(dec!(100000.129)).unwrap(), dec!(100000.13));
    }

    #[test]
    fn test_preserves_exact_cents() {
        // 0.1 + 0.2 style values stay exact in decimal arithmetic
        let amount = validate_amount(dec!(0.1) + dec!(0.2)).unwrap();
        assert_eq!(amount, dec!(0.30));
    }
}

mod date_tests {
    use super::*;

    #[test]
    fn test_parses_iso_date() {
        assert_eq!(
            validate_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_rejects_slash_format() {
        let err = validate_date("06/01/2024").unwrap_err();
        assert_eq!(err.message(), "Invalid date format. Use YYYY-MM-DD");
    }

    #[test]
    fn test_rejects_nonsense() {
        assert!(validate_date("not-a-date").is_err());
    }

    #[test]
    fn test_rejects_invalid_calendar_day() {
        assert!(validate_date("2023-02-29").is_err());
    }

    #[test]
    fn test_range_requires_start_before_end() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(validate_date_range(start, end).is_ok());
        assert!(validate_date_range(end, start).is_err());
    }

    #[test]
    fn test_range_rejects_equal_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let err = validate_date_range(day, day).unwrap_err();
        assert_eq!(err.message(), "End date must be after start date");
    }
}

proptest! {
    /// Any non-negative decimal passes amount validation with scale <= 2
    #[test]
    fn prop_non_negative_amounts_accepted(cents in 0i64..1_000_000_000_000) {
        let amount = Decimal::new(cents, 2);
        let validated = validate_amount(amount).unwrap();
        prop_assert_eq!(validated, amount);
        prop_assert!(validated.scale() <= 2);
    }

    /// Any strictly negative decimal fails amount validation
    #[test]
    fn prop_negative_amounts_rejected(cents in 1i64..1_000_000_000_000) {
        let amount = Decimal::new(-cents, 2);
        prop_assert!(matches!(
            validate_amount(amount),
            Err(CoreError::InvalidInput(_))
        ));
    }

    /// Formatting a date and parsing it back is the identity
    #[test]
    fn prop_date_round_trip(days in 0i32..40_000) {
        let date = NaiveDate::from_num_days_from_ce_opt(700_000 + days).unwrap();
        let formatted = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(validate_date(&formatted).unwrap(), date);
    }

    /// Ordered date pairs pass the range check; reversed pairs fail
    #[test]
    fn prop_date_range_ordering(a in 0i32..40_000, delta in 1i32..10_000) {
        let start = NaiveDate::from_num_days_from_ce_opt(700_000 + a).unwrap();
        let end = NaiveDate::from_num_days_from_ce_opt(700_000 + a + delta).unwrap();
        prop_assert!(validate_date_range(start, end).is_ok());
        prop_assert!(validate_date_range(end, start).is_err());
    }
}
