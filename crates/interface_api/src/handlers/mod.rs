//! Request handlers

pub mod claim;
pub mod health;
pub mod policy;
pub mod policyholder;
