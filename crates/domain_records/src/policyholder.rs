//! Policyholder record

use serde::{Deserialize, Serialize};

use core_kernel::PolicyholderId;

/// Maximum length of a policyholder name
pub const MAX_NAME_LEN: usize = 100;

/// A party contracting insurance coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policyholder {
    /// Unique identifier
    pub id: PolicyholderId,
    /// Display name
    pub name: String,
    /// Contact email address
    pub contact: String,
}

/// Input for creating a policyholder
///
/// Fields arrive unvalidated from the boundary; the constraint engine
/// validates them before constructing a [`Policyholder`].
#[derive(Debug, Clone)]
pub struct NewPolicyholder {
    pub id: String,
    pub name: String,
    pub contact: String,
}

/// Partial update for a policyholder
///
/// Only the fields listed here are legal to change; the identifier is
/// immutable. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PolicyholderUpdate {
    pub name: Option<String>,
    pub contact: Option<String>,
}
