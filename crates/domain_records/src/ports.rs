//! Storage port for record persistence
//!
//! The constraint engine talks to storage exclusively through this trait,
//! so adapters can be swapped (in-memory for tests and dev mode,
//! PostgreSQL in production) and multiple isolated instances can coexist.
//!
//! Each method is individually atomic: `insert_*` is check-and-insert,
//! `update_*`/`delete_*` are check-and-write. Compound invariants are the
//! engine's job.

use async_trait::async_trait;

use core_kernel::{ClaimId, PolicyId, PolicyholderId, StoreError};

use crate::claim::Claim;
use crate::policy::Policy;
use crate::policyholder::Policyholder;

/// Port trait for the record store
///
/// Listing methods return records in a stable order (ordered by id).
#[async_trait]
pub trait RecordStore: Send + Sync {
    // Policyholders

    /// Inserts a policyholder; fails with `Duplicate` if the id exists
    async fn insert_policyholder(&self, record: &Policyholder) -> Result<(), StoreError>;

    /// Returns a snapshot of a policyholder, or None if absent
    async fn get_policyholder(
        &self,
        id: &PolicyholderId,
    ) -> Result<Option<Policyholder>, StoreError>;

    /// Returns snapshots of all policyholders
    async fn list_policyholders(&self) -> Result<Vec<Policyholder>, StoreError>;

    /// Overwrites an existing policyholder; fails with `Missing` if absent
    async fn update_policyholder(&self, record: &Policyholder) -> Result<(), StoreError>;

    /// Removes a policyholder; fails with `Missing` if absent
    async fn delete_policyholder(&self, id: &PolicyholderId) -> Result<(), StoreError>;

    /// Counts policies owned by the given policyholder
    async fn count_policies_for_holder(&self, id: &PolicyholderId) -> Result<u64, StoreError>;

    // Policies

    /// Inserts a policy; fails with `Duplicate` if the id exists
    async fn insert_policy(&self, record: &Policy) -> Result<(), StoreError>;

    /// Returns a snapshot of a policy, or None if absent
    async fn get_policy(&self, id: &PolicyId) -> Result<Option<Policy>, StoreError>;

    /// Returns snapshots of all policies
    async fn list_policies(&self) -> Result<Vec<Policy>, StoreError>;

    /// Overwrites an existing policy; fails with `Missing` if absent
    async fn update_policy(&self, record: &Policy) -> Result<(), StoreError>;

    /// Removes a policy; fails with `Missing` if absent
    async fn delete_policy(&self, id: &PolicyId) -> Result<(), StoreError>;

    /// Counts claims filed against the given policy
    async fn count_claims_for_policy(&self, id: &PolicyId) -> Result<u64, StoreError>;

    // Claims

    /// Inserts a claim; fails with `Duplicate` if the id exists
    async fn insert_claim(&self, record: &Claim) -> Result<(), StoreError>;

    /// Returns a snapshot of a claim, or None if absent
    async fn get_claim(&self, id: &ClaimId) -> Result<Option<Claim>, StoreError>;

    /// Returns snapshots of all claims
    async fn list_claims(&self) -> Result<Vec<Claim>, StoreError>;

    /// Overwrites an existing claim; fails with `Missing` if absent
    async fn update_claim(&self, record: &Claim) -> Result<(), StoreError>;

    /// Removes a claim; fails with `Missing` if absent
    async fn delete_claim(&self, id: &ClaimId) -> Result<(), StoreError>;

    /// Returns all claims filed against the given policy
    async fn find_claims_by_policy(&self, id: &PolicyId) -> Result<Vec<Claim>, StoreError>;
}
