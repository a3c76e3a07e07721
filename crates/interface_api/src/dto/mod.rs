//! Request/Response data transfer objects
//!
//! Create and update requests carry `deny_unknown_fields` so an
//! unrecognized key is rejected at the boundary instead of silently
//! ignored.

pub mod claim;
pub mod policy;
pub mod policyholder;

use serde::Serialize;

/// Confirmation body returned by delete operations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
