//! Core Kernel - Foundational types and utilities for the claims system
//!
//! This crate provides the fundamental building blocks used across all
//! domain modules:
//! - Field validators with exact decimal arithmetic
//! - Strongly-typed record identifiers
//! - The shared error taxonomy and storage-port error type

pub mod error;
pub mod identifiers;
pub mod ports;
pub mod validation;

pub use error::CoreError;
pub use identifiers::{ClaimId, PolicyId, PolicyholderId};
pub use ports::StoreError;
pub use validation::{
    validate_amount, validate_date, validate_date_range, validate_email, validate_string,
};
