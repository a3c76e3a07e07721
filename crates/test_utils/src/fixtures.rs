//! Common fixtures for the test suite

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_records::RecordService;
use infra_store::MemoryStore;

/// Creates a service over a fresh, isolated in-memory store
pub fn memory_service() -> RecordService {
    RecordService::new(Arc::new(MemoryStore::new()))
}

/// Standard dates used across the suite
pub struct DateFixtures;

impl DateFixtures {
    /// First day of the standard test policy period
    pub fn policy_start() -> &'static str {
        "2024-01-01"
    }

    /// Last day of the standard test policy period
    pub fn policy_end() -> &'static str {
        "2025-01-01"
    }

    /// A loss date inside the standard period
    pub fn loss_date() -> &'static str {
        "2024-06-01"
    }

    /// A date outside the standard period
    pub fn out_of_period_date() -> &'static str {
        "2026-06-01"
    }

    pub fn parse(value: &str) -> NaiveDate {
        value.parse().expect("fixture date must be valid")
    }
}

/// Standard amounts used across the suite
pub struct AmountFixtures;

impl AmountFixtures {
    /// Standard coverage ceiling
    pub fn coverage() -> Decimal {
        dec!(100000.00)
    }

    /// A claim amount within the standard coverage
    pub fn claim_within_coverage() -> Decimal {
        dec!(50000.00)
    }

    /// A claim amount exceeding the standard coverage
    pub fn claim_over_coverage() -> Decimal {
        dec!(200000.00)
    }
}
