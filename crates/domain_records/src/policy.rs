//! Policy record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{PolicyId, PolicyholderId};

/// Maximum length of a policy type label
pub const MAX_TYPE_LEN: usize = 100;

/// A coverage agreement with an amount limit and validity period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Product label, e.g. "Home" or "Motor"
    pub policy_type: String,
    /// Maximum payable ceiling for claims under this policy (scale 2)
    pub coverage_amount: Decimal,
    /// First day of coverage
    pub start_date: NaiveDate,
    /// Day coverage ends; strictly after `start_date`
    pub end_date: NaiveDate,
    /// Owning policyholder
    pub policyholder_id: PolicyholderId,
}

impl Policy {
    /// Returns true if the given date falls within the validity period
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Input for creating a policy
///
/// Dates cross the boundary as `YYYY-MM-DD` strings and are parsed by the
/// constraint engine.
#[derive(Debug, Clone)]
pub struct NewPolicy {
    pub id: String,
    pub policy_type: String,
    pub coverage_amount: Decimal,
    pub start_date: String,
    pub end_date: String,
    pub policyholder_id: String,
}

/// Partial update for a policy
///
/// The identifier and the owning policyholder are immutable. Touching
/// either date re-checks the range against the untouched endpoint;
/// lowering the coverage re-checks every existing claim.
#[derive(Debug, Clone, Default)]
pub struct PolicyUpdate {
    pub policy_type: Option<String>,
    pub coverage_amount: Option<Decimal>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
