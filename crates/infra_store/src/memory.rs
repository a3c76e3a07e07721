//! In-memory store adapter
//!
//! Backs the record store with three `BTreeMap`s behind a single
//! `tokio::sync::RwLock`. One lock for the whole state gives each
//! operation serializable semantics, and the ordered maps give listings a
//! stable id order. Used as the test double and as the dev-mode backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{ClaimId, PolicyId, PolicyholderId, StoreError};
use domain_records::{Claim, Policy, Policyholder, RecordStore};

#[derive(Debug, Default)]
struct StoreState {
    policyholders: BTreeMap<PolicyholderId, Policyholder>,
    policies: BTreeMap<PolicyId, Policy>,
    claims: BTreeMap<ClaimId, Claim>,
}

/// In-memory record store
///
/// Each instance is fully isolated; tests create one per case.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_policyholder(&self, record: &Policyholder) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.policyholders.contains_key(&record.id) {
            return Err(StoreError::duplicate("Policyholder", &record.id));
        }
        state
            .policyholders
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn get_policyholder(
        &self,
        id: &PolicyholderId,
    ) -> Result<Option<Policyholder>, StoreError> {
        Ok(self.state.read().await.policyholders.get(id).cloned())
    }

    async fn list_policyholders(&self) -> Result<Vec<Policyholder>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .policyholders
            .values()
            .cloned()
            .collect())
    }

    async fn update_policyholder(&self, record: &Policyholder) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        match state.policyholders.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(StoreError::missing("Policyholder", &record.id)),
        }
    }

    async fn delete_policyholder(&self, id: &PolicyholderId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state
            .policyholders
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::missing("Policyholder", id))
    }

    async fn count_policies_for_holder(&self, id: &PolicyholderId) -> Result<u64, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .policies
            .values()
            .filter(|policy| policy.policyholder_id == *id)
            .count() as u64)
    }

    async fn insert_policy(&self, record: &Policy) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.policies.contains_key(&record.id) {
            return Err(StoreError::duplicate("Policy", &record.id));
        }
        state.policies.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn get_policy(&self, id: &PolicyId) -> Result<Option<Policy>, StoreError> {
        Ok(self.state.read().await.policies.get(id).cloned())
    }

    async fn list_policies(&self) -> Result<Vec<Policy>, StoreError> {
        Ok(self.state.read().await.policies.values().cloned().collect())
    }

    async fn update_policy(&self, record: &Policy) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        match state.policies.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(StoreError::missing("Policy", &record.id)),
        }
    }

    async fn delete_policy(&self, id: &PolicyId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state
            .policies
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::missing("Policy", id))
    }

    async fn count_claims_for_policy(&self, id: &PolicyId) -> Result<u64, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .claims
            .values()
            .filter(|claim| claim.policy_id == *id)
            .count() as u64)
    }

    async fn insert_claim(&self, record: &Claim) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.claims.contains_key(&record.id) {
            return Err(StoreError::duplicate("Claim", &record.id));
        }
        state.claims.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn get_claim(&self, id: &ClaimId) -> Result<Option<Claim>, StoreError> {
        Ok(self.state.read().await.claims.get(id).cloned())
    }

    async fn list_claims(&self) -> Result<Vec<Claim>, StoreError> {
        Ok(self.state.read().await.claims.values().cloned().collect())
    }

    async fn update_claim(&self, record: &Claim) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        match state.claims.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(StoreError::missing("Claim", &record.id)),
        }
    }

    async fn delete_claim(&self, id: &ClaimId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state
            .claims
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::missing("Claim", id))
    }

    async fn find_claims_by_policy(&self, id: &PolicyId) -> Result<Vec<Claim>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .claims
            .values()
            .filter(|claim| claim.policy_id == *id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain_records::ClaimStatus;
    use rust_decimal_macros::dec;

    fn holder(id: &str) -> Policyholder {
        Policyholder {
            id: PolicyholderId::new(id).unwrap(),
            name: "Alice".to_string(),
            contact: "alice@example.com".to_string(),
        }
    }

    fn policy(id: &str, holder_id: &str) -> Policy {
        Policy {
            id: PolicyId::new(id).unwrap(),
            policy_type: "Home".to_string(),
            coverage_amount: dec!(100000.00),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            policyholder_id: PolicyholderId::new(holder_id).unwrap(),
        }
    }

    fn claim(id: &str, policy_id: &str) -> Claim {
        Claim {
            id: ClaimId::new(id).unwrap(),
            description: "Fire damage".to_string(),
            amount: dec!(500.00),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            status: ClaimStatus::Pending,
            policy_id: PolicyId::new(policy_id).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_is_check_and_insert() {
        let store = MemoryStore::new();
        store.insert_policyholder(&holder("ph1")).await.unwrap();

        let err = store.insert_policyholder(&holder("ph1")).await.unwrap_err();
        assert!(err.is_duplicate());
    }

    #[tokio::test]
    async fn update_missing_record_fails() {
        let store = MemoryStore::new();
        let err = store.update_policyholder(&holder("ph1")).await.unwrap_err();
        assert!(err.is_missing());
    }

    #[tokio::test]
    async fn delete_missing_record_fails() {
        let store = MemoryStore::new();
        let id = ClaimId::new("c1").unwrap();
        assert!(store.delete_claim(&id).await.unwrap_err().is_missing());
    }

    #[tokio::test]
    async fn listings_come_back_in_id_order() {
        let store = MemoryStore::new();
        for id in ["ph3", "ph1", "ph2"] {
            store.insert_policyholder(&holder(id)).await.unwrap();
        }

        let listed = store.list_policyholders().await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|ph| ph.id.as_str()).collect();
        assert_eq!(ids, vec!["ph1", "ph2", "ph3"]);
    }

    #[tokio::test]
    async fn dependent_counts_track_foreign_keys() {
        let store = MemoryStore::new();
        store.insert_policyholder(&holder("ph1")).await.unwrap();
        store.insert_policy(&policy("p1", "ph1")).await.unwrap();
        store.insert_policy(&policy("p2", "ph1")).await.unwrap();
        store.insert_claim(&claim("c1", "p1")).await.unwrap();

        let holder_id = PolicyholderId::new("ph1").unwrap();
        assert_eq!(store.count_policies_for_holder(&holder_id).await.unwrap(), 2);

        let p1 = PolicyId::new("p1").unwrap();
        let p2 = PolicyId::new("p2").unwrap();
        assert_eq!(store.count_claims_for_policy(&p1).await.unwrap(), 1);
        assert_eq!(store.count_claims_for_policy(&p2).await.unwrap(), 0);
        assert_eq!(store.find_claims_by_policy(&p1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_returns_detached_snapshot() {
        let store = MemoryStore::new();
        store.insert_policyholder(&holder("ph1")).await.unwrap();

        let id = PolicyholderId::new("ph1").unwrap();
        let mut snapshot = store.get_policyholder(&id).await.unwrap().unwrap();
        snapshot.name = "Mallory".to_string();

        let fresh = store.get_policyholder(&id).await.unwrap().unwrap();
        assert_eq!(fresh.name, "Alice");
    }
}
