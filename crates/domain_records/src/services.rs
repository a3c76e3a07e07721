//! Record domain services
//!
//! [`RecordService`] is the constraint engine sitting between the API
//! boundary and the store. Every operation executes as one logical
//! transaction: read current state, validate the touched fields and every
//! invariant depending on them, then write. Validation and business-rule
//! failures surface as `InvalidInput`/`NotFound`/`Conflict`; store
//! failures surface as `StorageFailure` (the adapter guarantees nothing
//! was persisted).

use std::fmt;
use std::sync::Arc;

use core_kernel::{
    validate_amount, validate_date, validate_date_range, validate_email, validate_string,
    ClaimId, CoreError, PolicyId, PolicyholderId,
};

use crate::claim::{validate_status, Claim, ClaimStatus, ClaimUpdate, NewClaim, MAX_DESCRIPTION_LEN};
use crate::policy::{NewPolicy, Policy, PolicyUpdate, MAX_TYPE_LEN};
use crate::policyholder::{NewPolicyholder, Policyholder, PolicyholderUpdate, MAX_NAME_LEN};
use crate::ports::RecordStore;

fn not_found(entity: &str, id: impl fmt::Display) -> CoreError {
    CoreError::not_found(format!("{entity} with id '{id}' not found"))
}

/// Constraint engine over a record store
///
/// Holds an explicit store handle rather than global state, so tests can
/// run against isolated in-memory instances.
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn RecordStore>,
}

impl RecordService {
    /// Creates a new service over the given store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    // ------------------------------------------------------------------
    // Policyholders
    // ------------------------------------------------------------------

    /// Creates a policyholder
    ///
    /// # Errors
    ///
    /// `InvalidInput` on malformed fields, `Conflict` if the id exists
    pub async fn create_policyholder(
        &self,
        input: NewPolicyholder,
    ) -> Result<Policyholder, CoreError> {
        let id = PolicyholderId::new(input.id)?;
        validate_string(&input.name, "Name", MAX_NAME_LEN)?;
        validate_email(&input.contact)?;

        let record = Policyholder {
            id,
            name: input.name,
            contact: input.contact,
        };
        self.store.insert_policyholder(&record).await?;

        tracing::info!(id = %record.id, "policyholder created");
        Ok(record)
    }

    /// Returns a snapshot of a policyholder
    pub async fn get_policyholder(&self, id: &str) -> Result<Policyholder, CoreError> {
        let id = PolicyholderId::new(id)?;
        self.store
            .get_policyholder(&id)
            .await?
            .ok_or_else(|| not_found("Policyholder", &id))
    }

    /// Lists all policyholders in stable id order
    pub async fn list_policyholders(&self) -> Result<Vec<Policyholder>, CoreError> {
        Ok(self.store.list_policyholders().await?)
    }

    /// Applies a partial update to a policyholder
    ///
    /// Only provided fields change; each touched field is re-validated.
    pub async fn update_policyholder(
        &self,
        id: &str,
        update: PolicyholderUpdate,
    ) -> Result<Policyholder, CoreError> {
        let id = PolicyholderId::new(id)?;
        let mut record = self
            .store
            .get_policyholder(&id)
            .await?
            .ok_or_else(|| not_found("Policyholder", &id))?;

        if let Some(name) = update.name {
            validate_string(&name, "Name", MAX_NAME_LEN)?;
            record.name = name;
        }
        if let Some(contact) = update.contact {
            validate_email(&contact)?;
            record.contact = contact;
        }

        self.store.update_policyholder(&record).await?;
        tracing::info!(id = %record.id, "policyholder updated");
        Ok(record)
    }

    /// Deletes a policyholder
    ///
    /// # Errors
    ///
    /// `NotFound` if absent, `Conflict` while the policyholder still owns
    /// policies (strict referential protection, no cascade)
    pub async fn delete_policyholder(&self, id: &str) -> Result<(), CoreError> {
        let id = PolicyholderId::new(id)?;
        if self.store.get_policyholder(&id).await?.is_none() {
            return Err(not_found("Policyholder", &id));
        }
        if self.store.count_policies_for_holder(&id).await? > 0 {
            return Err(CoreError::conflict("Policyholder has existing policies"));
        }

        self.store.delete_policyholder(&id).await?;
        tracing::info!(%id, "policyholder deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Policies
    // ------------------------------------------------------------------

    /// Creates a policy
    ///
    /// # Errors
    ///
    /// `Conflict` on duplicate id, `NotFound` if the policyholder is
    /// absent, `InvalidInput` on malformed fields or a reversed date range
    pub async fn create_policy(&self, input: NewPolicy) -> Result<Policy, CoreError> {
        let id = PolicyId::new(input.id)?;
        validate_string(&input.policy_type, "Policy Type", MAX_TYPE_LEN)?;
        let coverage_amount = validate_amount(input.coverage_amount)?;
        let start_date = validate_date(&input.start_date)?;
        let end_date = validate_date(&input.end_date)?;
        validate_date_range(start_date, end_date)?;
        let policyholder_id = PolicyholderId::new(input.policyholder_id)?;

        if self.store.get_policyholder(&policyholder_id).await?.is_none() {
            return Err(not_found("Policyholder", &policyholder_id));
        }

        let record = Policy {
            id,
            policy_type: input.policy_type,
            coverage_amount,
            start_date,
            end_date,
            policyholder_id,
        };
        self.store.insert_policy(&record).await?;

        tracing::info!(id = %record.id, holder = %record.policyholder_id, "policy created");
        Ok(record)
    }

    /// Returns a snapshot of a policy
    pub async fn get_policy(&self, id: &str) -> Result<Policy, CoreError> {
        let id = PolicyId::new(id)?;
        self.store
            .get_policy(&id)
            .await?
            .ok_or_else(|| not_found("Policy", &id))
    }

    /// Lists all policies in stable id order
    pub async fn list_policies(&self) -> Result<Vec<Policy>, CoreError> {
        Ok(self.store.list_policies().await?)
    }

    /// Applies a partial update to a policy
    ///
    /// The date range is re-checked using the stored value for any
    /// untouched endpoint. Lowering the coverage amount re-checks every
    /// existing claim against the new ceiling.
    pub async fn update_policy(&self, id: &str, update: PolicyUpdate) -> Result<Policy, CoreError> {
        let id = PolicyId::new(id)?;
        let mut record = self
            .store
            .get_policy(&id)
            .await?
            .ok_or_else(|| not_found("Policy", &id))?;

        let mut start_date = record.start_date;
        let mut end_date = record.end_date;
        if let Some(value) = &update.start_date {
            start_date = validate_date(value)?;
        }
        if let Some(value) = &update.end_date {
            end_date = validate_date(value)?;
        }
        validate_date_range(start_date, end_date)?;

        if let Some(policy_type) = update.policy_type {
            validate_string(&policy_type, "Policy Type", MAX_TYPE_LEN)?;
            record.policy_type = policy_type;
        }
        if let Some(coverage_amount) = update.coverage_amount {
            let coverage_amount = validate_amount(coverage_amount)?;
            if coverage_amount < record.coverage_amount {
                let claims = self.store.find_claims_by_policy(&record.id).await?;
                if claims.iter().any(|claim| claim.amount > coverage_amount) {
                    return Err(CoreError::invalid_input(
                        "Coverage amount is below an existing claim amount",
                    ));
                }
            }
            record.coverage_amount = coverage_amount;
        }
        record.start_date = start_date;
        record.end_date = end_date;

        self.store.update_policy(&record).await?;
        tracing::info!(id = %record.id, "policy updated");
        Ok(record)
    }

    /// Deletes a policy
    ///
    /// # Errors
    ///
    /// `NotFound` if absent, `Conflict` while claims are filed against it
    pub async fn delete_policy(&self, id: &str) -> Result<(), CoreError> {
        let id = PolicyId::new(id)?;
        if self.store.get_policy(&id).await?.is_none() {
            return Err(not_found("Policy", &id));
        }
        if self.store.count_claims_for_policy(&id).await? > 0 {
            return Err(CoreError::conflict("Policy has existing claims"));
        }

        self.store.delete_policy(&id).await?;
        tracing::info!(%id, "policy deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Claims
    // ------------------------------------------------------------------

    /// Creates a claim, defaulting the status to Pending when unset
    ///
    /// # Errors
    ///
    /// `Conflict` on duplicate id, `NotFound` if the policy is absent,
    /// `InvalidInput` if the amount exceeds the policy's coverage or the
    /// loss date falls outside the policy period
    pub async fn create_claim(&self, input: NewClaim) -> Result<Claim, CoreError> {
        let id = ClaimId::new(input.id)?;
        validate_string(&input.description, "Description", MAX_DESCRIPTION_LEN)?;
        let amount = validate_amount(input.amount)?;
        let date = validate_date(&input.date)?;
        let status = match input.status.as_deref() {
            Some(value) => validate_status(value)?,
            None => ClaimStatus::default(),
        };
        let policy_id = PolicyId::new(input.policy_id)?;

        let policy = self
            .store
            .get_policy(&policy_id)
            .await?
            .ok_or_else(|| not_found("Policy", &policy_id))?;
        if amount > policy.coverage_amount {
            return Err(CoreError::invalid_input(
                "Claim amount exceeds policy coverage",
            ));
        }
        if !policy.covers_date(date) {
            return Err(CoreError::invalid_input("Claim date outside policy period"));
        }

        let record = Claim {
            id,
            description: input.description,
            amount,
            date,
            status,
            policy_id,
        };
        self.store.insert_claim(&record).await?;

        tracing::info!(id = %record.id, policy = %record.policy_id, "claim created");
        Ok(record)
    }

    /// Returns a snapshot of a claim
    pub async fn get_claim(&self, id: &str) -> Result<Claim, CoreError> {
        let id = ClaimId::new(id)?;
        self.store
            .get_claim(&id)
            .await?
            .ok_or_else(|| not_found("Claim", &id))
    }

    /// Lists all claims in stable id order
    pub async fn list_claims(&self) -> Result<Vec<Claim>, CoreError> {
        Ok(self.store.list_claims().await?)
    }

    /// Applies a partial update to a claim
    ///
    /// Amount and date changes are re-checked against the current parent
    /// policy; status changes are free assignments among the three values.
    pub async fn update_claim(&self, id: &str, update: ClaimUpdate) -> Result<Claim, CoreError> {
        let id = ClaimId::new(id)?;
        let mut record = self
            .store
            .get_claim(&id)
            .await?
            .ok_or_else(|| not_found("Claim", &id))?;

        if let Some(description) = update.description {
            validate_string(&description, "Description", MAX_DESCRIPTION_LEN)?;
            record.description = description;
        }
        if update.amount.is_some() || update.date.is_some() {
            let policy = self
                .store
                .get_policy(&record.policy_id)
                .await?
                .ok_or_else(|| not_found("Policy", &record.policy_id))?;
            if let Some(amount) = update.amount {
                let amount = validate_amount(amount)?;
                if amount > policy.coverage_amount {
                    return Err(CoreError::invalid_input(
                        "Claim amount exceeds policy coverage",
                    ));
                }
                record.amount = amount;
            }
            if let Some(value) = &update.date {
                let date = validate_date(value)?;
                if !policy.covers_date(date) {
                    return Err(CoreError::invalid_input("Claim date outside policy period"));
                }
                record.date = date;
            }
        }
        if let Some(value) = update.status {
            record.status = validate_status(&value)?;
        }

        self.store.update_claim(&record).await?;
        tracing::info!(id = %record.id, status = %record.status, "claim updated");
        Ok(record)
    }

    /// Deletes a claim; claims have no dependents
    pub async fn delete_claim(&self, id: &str) -> Result<(), CoreError> {
        let id = ClaimId::new(id)?;
        if self.store.get_claim(&id).await?.is_none() {
            return Err(not_found("Claim", &id));
        }

        self.store.delete_claim(&id).await?;
        tracing::info!(%id, "claim deleted");
        Ok(())
    }
}
