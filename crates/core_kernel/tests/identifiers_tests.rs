//! Tests for strongly-typed record identifiers

use core_kernel::identifiers::{ClaimId, PolicyId, PolicyholderId, MAX_ID_LEN};
use std::str::FromStr;

#[test]
fn test_accepts_simple_id() {
    let id = PolicyholderId::new("ph1").unwrap();
    assert_eq!(id.as_str(), "ph1");
    assert_eq!(id.to_string(), "ph1");
}

#[test]
fn test_rejects_empty_id() {
    let err = PolicyholderId::new("").unwrap_err();
    assert_eq!(err.message(), "Policyholder ID must be a non-empty string");
}

#[test]
fn test_rejects_over_long_id() {
    let err = PolicyId::new("p".repeat(MAX_ID_LEN + 1)).unwrap_err();
    assert_eq!(err.message(), "Policy ID must not exceed 50 characters");
}

#[test]
fn test_accepts_id_at_limit() {
    assert!(ClaimId::new("c".repeat(MAX_ID_LEN)).is_ok());
}

#[test]
fn test_from_str_validates() {
    assert!(ClaimId::from_str("c1").is_ok());
    assert!(ClaimId::from_str("").is_err());
}

#[test]
fn test_serializes_transparently() {
    let id = PolicyId::new("p1").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"p1\"");

    let back: PolicyId = serde_json::from_str("\"p1\"").unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_ids_order_lexicographically() {
    let mut ids = vec![
        ClaimId::new("c3").unwrap(),
        ClaimId::new("c1").unwrap(),
        ClaimId::new("c2").unwrap(),
    ];
    ids.sort();
    let names: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(names, vec!["c1", "c2", "c3"]);
}
