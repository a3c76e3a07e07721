//! Claim record and status

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, CoreError, PolicyId};

/// Maximum length of a claim description
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Claim status
///
/// Any status may be assigned from any other; there is no transition
/// graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClaimStatus {
    /// Awaiting adjudication
    #[default]
    Pending,
    /// Accepted for payout
    Approved,
    /// Declined
    Rejected,
}

impl ClaimStatus {
    /// All legal status values, in display form
    pub const ALL: [ClaimStatus; 3] = [
        ClaimStatus::Pending,
        ClaimStatus::Approved,
        ClaimStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ClaimStatus::Pending),
            "Approved" => Ok(ClaimStatus::Approved),
            "Rejected" => Ok(ClaimStatus::Rejected),
            _ => Err(CoreError::invalid_input(
                "Status must be one of: Pending, Approved, Rejected",
            )),
        }
    }
}

/// Validates a status string against the claim status enum
pub fn validate_status(value: &str) -> Result<ClaimStatus, CoreError> {
    value.parse()
}

/// A request for payout against a policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// What happened
    pub description: String,
    /// Claimed amount; never exceeds the policy's coverage amount (scale 2)
    pub amount: Decimal,
    /// Date of loss; falls within the policy's validity period
    pub date: NaiveDate,
    /// Adjudication status
    pub status: ClaimStatus,
    /// Policy the claim is filed against
    pub policy_id: PolicyId,
}

/// Input for creating a claim
///
/// `status` defaults to Pending when unset.
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: String,
    pub status: Option<String>,
    pub policy_id: String,
}

/// Partial update for a claim
///
/// The identifier and the parent policy are immutable. Amount and date
/// updates re-check the coverage limit and validity period against the
/// current parent policy.
#[derive(Debug, Clone, Default)]
pub struct ClaimUpdate {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub status: Option<String>,
}
