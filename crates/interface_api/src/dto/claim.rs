//! Claim DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_records::{Claim, ClaimStatus, ClaimUpdate, NewClaim};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateClaimRequest {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: String,
    /// Defaults to Pending when unset
    pub status: Option<String>,
    pub policy_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateClaimRequest {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: ClaimStatus,
    pub policy_id: String,
}

impl From<CreateClaimRequest> for NewClaim {
    fn from(request: CreateClaimRequest) -> Self {
        NewClaim {
            id: request.id,
            description: request.description,
            amount: request.amount,
            date: request.date,
            status: request.status,
            policy_id: request.policy_id,
        }
    }
}

impl From<UpdateClaimRequest> for ClaimUpdate {
    fn from(request: UpdateClaimRequest) -> Self {
        ClaimUpdate {
            description: request.description,
            amount: request.amount,
            date: request.date,
            status: request.status,
        }
    }
}

impl From<Claim> for ClaimResponse {
    fn from(record: Claim) -> Self {
        ClaimResponse {
            id: record.id.into_string(),
            description: record.description,
            amount: record.amount,
            date: record.date,
            status: record.status,
            policy_id: record.policy_id.into_string(),
        }
    }
}
