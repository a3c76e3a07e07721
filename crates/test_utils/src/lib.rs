//! Shared test utilities for the claims system
//!
//! Builders construct create-payloads with sensible defaults so tests
//! only spell out the fields they care about; fixtures provide the common
//! dates, amounts, and a ready-made in-memory service.

pub mod builders;
pub mod fixtures;

pub use builders::{TestClaimBuilder, TestPolicyBuilder, TestPolicyholderBuilder};
pub use fixtures::{memory_service, AmountFixtures, DateFixtures};
