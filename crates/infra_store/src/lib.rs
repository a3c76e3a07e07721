//! Store adapters for the claims system
//!
//! Two implementations of the `domain_records` storage port:
//! - [`MemoryStore`]: isolated in-memory store for tests and dev mode
//! - [`PgRecordStore`]: PostgreSQL adapter over SQLx with schema setup
//!
//! Both uphold the port contract: every operation is individually atomic,
//! listings come back ordered by id, and failures are reported through the
//! unified `StoreError` classification.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgRecordStore;
