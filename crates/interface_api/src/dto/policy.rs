//! Policy DTOs
//!
//! Dates cross the boundary as `YYYY-MM-DD` strings and are parsed by the
//! constraint engine; responses carry `chrono::NaiveDate`, which
//! serializes back to the same format. Amounts are exact decimals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_records::{NewPolicy, Policy, PolicyUpdate};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePolicyRequest {
    pub id: String,
    pub policy_type: String,
    pub coverage_amount: Decimal,
    pub start_date: String,
    pub end_date: String,
    pub policyholder_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePolicyRequest {
    pub policy_type: Option<String>,
    pub coverage_amount: Option<Decimal>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub id: String,
    pub policy_type: String,
    pub coverage_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub policyholder_id: String,
}

impl From<CreatePolicyRequest> for NewPolicy {
    fn from(request: CreatePolicyRequest) -> Self {
        NewPolicy {
            id: request.id,
            policy_type: request.policy_type,
            coverage_amount: request.coverage_amount,
            start_date: request.start_date,
            end_date: request.end_date,
            policyholder_id: request.policyholder_id,
        }
    }
}

impl From<UpdatePolicyRequest> for PolicyUpdate {
    fn from(request: UpdatePolicyRequest) -> Self {
        PolicyUpdate {
            policy_type: request.policy_type,
            coverage_amount: request.coverage_amount,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

impl From<Policy> for PolicyResponse {
    fn from(record: Policy) -> Self {
        PolicyResponse {
            id: record.id.into_string(),
            policy_type: record.policy_type,
            coverage_amount: record.coverage_amount,
            start_date: record.start_date,
            end_date: record.end_date,
            policyholder_id: record.policyholder_id.into_string(),
        }
    }
}
