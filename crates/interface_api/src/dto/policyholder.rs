//! Policyholder DTOs

use serde::{Deserialize, Serialize};

use domain_records::{NewPolicyholder, Policyholder, PolicyholderUpdate};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePolicyholderRequest {
    pub id: String,
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePolicyholderRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PolicyholderResponse {
    pub id: String,
    pub name: String,
    pub contact: String,
}

impl From<CreatePolicyholderRequest> for NewPolicyholder {
    fn from(request: CreatePolicyholderRequest) -> Self {
        NewPolicyholder {
            id: request.id,
            name: request.name,
            contact: request.contact,
        }
    }
}

impl From<UpdatePolicyholderRequest> for PolicyholderUpdate {
    fn from(request: UpdatePolicyholderRequest) -> Self {
        PolicyholderUpdate {
            name: request.name,
            contact: request.contact,
        }
    }
}

impl From<Policyholder> for PolicyholderResponse {
    fn from(record: Policyholder) -> Self {
        PolicyholderResponse {
            id: record.id.into_string(),
            name: record.name,
            contact: record.contact,
        }
    }
}
