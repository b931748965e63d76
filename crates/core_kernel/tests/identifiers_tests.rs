//! Tests for identifier types across the public API

use core_kernel::{ExpenseId, GroupId, ParticipantId};
use uuid::Uuid;

#[test]
fn test_ids_are_unique() {
    let a = ParticipantId::new();
    let b = ParticipantId::new();
    assert_ne!(a, b);
}

#[test]
fn test_serde_is_transparent_uuid() {
    let uuid = Uuid::new_v4();
    let id = ExpenseId::from_uuid(uuid);

    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{}\"", uuid));

    let back: ExpenseId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_prefixed_display_parses_back() {
    let id = GroupId::new();
    let display = id.to_string();
    assert!(display.starts_with("GRP-"));

    let parsed: GroupId = display.parse().unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn test_invalid_string_is_rejected() {
    let result: Result<ParticipantId, _> = "not-a-uuid".parse();
    assert!(result.is_err());
}
