//! Test data builders
//!
//! Builder patterns for constructing create-payloads with sensible
//! defaults. Tests specify only the relevant fields and rely on defaults
//! for everything else.

use rust_decimal::Decimal;

use domain_records::{NewClaim, NewPolicy, NewPolicyholder};

use crate::fixtures::{AmountFixtures, DateFixtures};

/// Builder for policyholder create-payloads
pub struct TestPolicyholderBuilder {
    id: String,
    name: String,
    contact: String,
}

impl Default for TestPolicyholderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyholderBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: "ph1".to_string(),
            name: "Alice".to_string(),
            contact: "alice@example.com".to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = contact.into();
        self
    }

    pub fn build(self) -> NewPolicyholder {
        NewPolicyholder {
            id: self.id,
            name: self.name,
            contact: self.contact,
        }
    }
}

/// Builder for policy create-payloads
pub struct TestPolicyBuilder {
    id: String,
    policy_type: String,
    coverage_amount: Decimal,
    start_date: String,
    end_date: String,
    policyholder_id: String,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a builder with default values owned by policyholder `ph1`
    pub fn new() -> Self {
        Self {
            id: "p1".to_string(),
            policy_type: "Home".to_string(),
            coverage_amount: AmountFixtures::coverage(),
            start_date: DateFixtures::policy_start().to_string(),
            end_date: DateFixtures::policy_end().to_string(),
            policyholder_id: "ph1".to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_policy_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = policy_type.into();
        self
    }

    pub fn with_coverage_amount(mut self, amount: Decimal) -> Self {
        self.coverage_amount = amount;
        self
    }

    pub fn with_start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = date.into();
        self
    }

    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = date.into();
        self
    }

    pub fn with_policyholder_id(mut self, id: impl Into<String>) -> Self {
        self.policyholder_id = id.into();
        self
    }

    pub fn build(self) -> NewPolicy {
        NewPolicy {
            id: self.id,
            policy_type: self.policy_type,
            coverage_amount: self.coverage_amount,
            start_date: self.start_date,
            end_date: self.end_date,
            policyholder_id: self.policyholder_id,
        }
    }
}

/// Builder for claim create-payloads
pub struct TestClaimBuilder {
    id: String,
    description: String,
    amount: Decimal,
    date: String,
    status: Option<String>,
    policy_id: String,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a builder with default values filed against policy `p1`
    pub fn new() -> Self {
        Self {
            id: "c1".to_string(),
            description: "Fire damage".to_string(),
            amount: AmountFixtures::claim_within_coverage(),
            date: DateFixtures::loss_date().to_string(),
            status: None,
            policy_id: "p1".to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_policy_id(mut self, id: impl Into<String>) -> Self {
        self.policy_id = id.into();
        self
    }

    pub fn build(self) -> NewClaim {
        NewClaim {
            id: self.id,
            description: self.description,
            amount: self.amount,
            date: self.date,
            status: self.status,
            policy_id: self.policy_id,
        }
    }
}
