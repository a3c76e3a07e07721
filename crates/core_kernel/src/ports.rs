//! Storage-port error type
//!
//! Domain crates define their own store port traits; adapters implement
//! them over the concrete backend (in-memory maps, PostgreSQL). All
//! adapters report failures through the unified [`StoreError`] so the
//! constraint engine can classify outcomes without knowing the backend.
//!
//! Classification at the commit boundary:
//! - `Duplicate` and `Referenced` become Conflicts
//! - `Missing` becomes a NotFound
//! - `Unavailable` and `Backend` become StorageFailure and trigger rollback

use std::fmt;
use thiserror::Error;

use crate::error::CoreError;

/// Errors reported by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same identifier already exists
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// The record to update or delete does not exist
    #[error("Missing record: {0}")]
    Missing(String),

    /// The record is still referenced by dependent records
    #[error("Still referenced: {0}")]
    Referenced(String),

    /// The backend could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed the operation
    #[error("Backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a duplicate-entry error for an entity type and identifier
    pub fn duplicate(entity: &str, id: impl fmt::Display) -> Self {
        StoreError::Duplicate(format!("{entity} with id '{id}' already exists"))
    }

    /// Creates a missing-record error for an entity type and identifier
    pub fn missing(entity: &str, id: impl fmt::Display) -> Self {
        StoreError::Missing(format!("{entity} with id '{id}' not found"))
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::Missing(_))
    }

    /// True for failures of the backend itself rather than of the data
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, StoreError::Unavailable(_) | StoreError::Backend(_))
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(msg) | StoreError::Referenced(msg) => CoreError::Conflict(msg),
            StoreError::Missing(msg) => CoreError::NotFound(msg),
            StoreError::Unavailable(msg) | StoreError::Backend(msg) => {
                CoreError::StorageFailure(msg)
            }
        }
    }
}
