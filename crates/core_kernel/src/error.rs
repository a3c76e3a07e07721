//! Core error taxonomy used across the system
//!
//! Every failure path in the system resolves to one of four categories:
//! invalid input (malformed fields or business-rule violations), missing
//! records, conflicting mutations (duplicate identifiers, blocked deletes),
//! and storage failures. Validation and business-rule errors propagate
//! unmodified to the API boundary; storage failures are wrapped at the
//! commit boundary.

use thiserror::Error;

/// Core error type for the claims system
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Malformed, missing, or out-of-range field, or a business-rule violation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate identifier or a delete blocked by dependents
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The underlying store failed; any partial mutation was rolled back
    #[error("Storage failure: {0}")]
    StorageFailure(String),
}

impl CoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CoreError::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        CoreError::Conflict(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        CoreError::StorageFailure(message.into())
    }

    /// Returns the human-readable message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            CoreError::InvalidInput(msg)
            | CoreError::NotFound(msg)
            | CoreError::Conflict(msg)
            | CoreError::StorageFailure(msg) => msg,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::Conflict(_))
    }
}
