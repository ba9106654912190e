#![cfg(feature = "serde")]

//! Integration tests for serde support.

use adaptive_int_set::set::{AdaptiveIntSet, BackendKind};
use rstest::rstest;

#[rstest]
fn test_linear_json_roundtrip() {
    let set: AdaptiveIntSet = [5, 1, 9].into_iter().collect();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[5,1,9]");

    let restored: AdaptiveIntSet = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
    assert_eq!(restored.backend_kind(), BackendKind::Linear);
}

#[rstest]
fn test_hashed_json_roundtrip() {
    let set: AdaptiveIntSet = (1..=30).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: AdaptiveIntSet = serde_json::from_str(&json).unwrap();

    assert_eq!(set, restored);
    assert_eq!(restored.backend_kind(), BackendKind::Hashed);
}

#[rstest]
fn test_deserialize_collapses_duplicates() {
    let restored: AdaptiveIntSet = serde_json::from_str("[1, 1, 2, 2, 2]").unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.elements(), vec![1, 2]);
}

#[rstest]
fn test_deserialize_rejects_non_integers() {
    let result: Result<AdaptiveIntSet, _> = serde_json::from_str("[1, \"two\"]");
    assert!(result.is_err());
}

#[rstest]
fn test_empty_json_roundtrip() {
    let set = AdaptiveIntSet::new();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[]");
    let restored: AdaptiveIntSet = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}
