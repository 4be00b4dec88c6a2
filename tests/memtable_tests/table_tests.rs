//! MemTable Tests
//!
//! Tests verify:
//! - Conditional create (no overwrite)
//! - Conditional update (no implicit create)
//! - Removal returns the removed value
//! - Seeding from persisted entries

use std::collections::HashMap;

use webkv::memtable::MemTable;
use webkv::StoreError;

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_memtable_is_empty() {
    let memtable = MemTable::new();
    assert_eq!(memtable.entry_count(), 0);
    assert!(memtable.is_empty());
}

#[test]
fn test_create_and_get() {
    let mut memtable = MemTable::new();

    memtable.create("key1".into(), "value1".into()).unwrap();

    assert_eq!(memtable.get("key1"), Some("value1"));
    assert!(memtable.contains("key1"));
}

#[test]
fn test_get_nonexistent_key() {
    let memtable = MemTable::new();

    assert_eq!(memtable.get("nonexistent"), None);
    assert!(!memtable.contains("nonexistent"));
}

#[test]
fn test_create_existing_key_conflicts() {
    let mut memtable = MemTable::new();
    memtable.create("key".into(), "first".into()).unwrap();

    let result = memtable.create("key".into(), "second".into());

    assert!(matches!(result, Err(StoreError::Conflict)));
    assert_eq!(memtable.get("key"), Some("first"));
    assert_eq!(memtable.entry_count(), 1);
}

#[test]
fn test_update_existing_returns_previous() {
    let mut memtable = MemTable::new();
    memtable.create("key".into(), "old".into()).unwrap();

    let previous = memtable.update("key", "new".into()).unwrap();

    assert_eq!(previous, "old");
    assert_eq!(memtable.get("key"), Some("new"));
}

#[test]
fn test_update_missing_key_does_not_create() {
    let mut memtable = MemTable::new();

    let result = memtable.update("ghost", "value".into());

    assert!(matches!(result, Err(StoreError::NotFound)));
    assert!(memtable.is_empty());
}

#[test]
fn test_remove_returns_value() {
    let mut memtable = MemTable::new();
    memtable.create("key".into(), "value".into()).unwrap();

    assert_eq!(memtable.remove("key").unwrap(), "value");
    assert!(!memtable.contains("key"));
    assert!(memtable.is_empty());
}

#[test]
fn test_remove_missing_key() {
    let mut memtable = MemTable::new();
    memtable.create("other".into(), "value".into()).unwrap();

    assert!(matches!(memtable.remove("ghost"), Err(StoreError::NotFound)));
    assert_eq!(memtable.entry_count(), 1);
}

// =============================================================================
// Seeding Tests
// =============================================================================

#[test]
fn test_from_entries() {
    let mut entries = HashMap::new();
    entries.insert("a".to_string(), "1".to_string());
    entries.insert("b".to_string(), "2".to_string());

    let memtable = MemTable::from_entries(entries.clone());

    assert_eq!(memtable.entry_count(), 2);
    assert_eq!(memtable.entries(), &entries);
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_empty_key_and_value() {
    let mut memtable = MemTable::new();

    memtable.create(String::new(), String::new()).unwrap();

    assert_eq!(memtable.get(""), Some(""));
}

#[test]
fn test_keys_are_not_normalized() {
    let mut memtable = MemTable::new();

    memtable.create("a/b".into(), "slash".into()).unwrap();
    memtable.create("a//b".into(), "double".into()).unwrap();
    memtable.create("A/B".into(), "upper".into()).unwrap();

    assert_eq!(memtable.entry_count(), 3);
    assert_eq!(memtable.get("a//b"), Some("double"));
}
