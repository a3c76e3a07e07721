//! Record domain - policyholders, policies, and claims
//!
//! This crate owns the entity model and the constraint engine sitting
//! between API requests and persistent storage. The engine enforces
//! referential integrity, coverage limits, date-range rules, and strict
//! delete protection atop the [`RecordStore`] port; adapters provide the
//! actual storage.
//!
//! # Architecture
//!
//! - **Entities**: [`Policyholder`], [`Policy`], [`Claim`] with typed ids
//! - **Inputs**: `New*` payloads for creation, `*Update` partial updates
//!   listing only the legal mutable fields
//! - **Port**: [`RecordStore`], implemented by `infra_store` adapters
//! - **Engine**: [`RecordService`], one logical transaction per operation

pub mod claim;
pub mod policy;
pub mod policyholder;
pub mod ports;
pub mod services;

pub use claim::{validate_status, Claim, ClaimStatus, ClaimUpdate, NewClaim};
pub use policy::{NewPolicy, Policy, PolicyUpdate};
pub use policyholder::{NewPolicyholder, Policyholder, PolicyholderUpdate};
pub use ports::RecordStore;
pub use services::RecordService;
