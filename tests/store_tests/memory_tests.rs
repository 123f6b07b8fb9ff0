//! Tests for MemoryStore
//!
//! These tests verify:
//! - Blank construction and capacity
//! - Byte access through the trait object
//! - Batched writes and fills

use framkv::{ByteStore, FramError, MemoryStore, EMPTY_MARKER};

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_store_has_capacity_and_is_blank() {
    let store = MemoryStore::new(8192);

    assert_eq!(store.len(), 8192);
    assert!(!store.is_empty());
    assert!(store.data().iter().all(|b| *b == EMPTY_MARKER));
}

#[test]
fn test_with_data_keeps_contents() {
    let store = MemoryStore::with_data(b"abc".to_vec());

    assert_eq!(store.len(), 3);
    assert_eq!(store.get(1).unwrap(), b'b');
}

// =============================================================================
// Access Tests
// =============================================================================

#[test]
fn test_access_through_trait_object() {
    let mut store = MemoryStore::new(4);
    let dyn_store: &mut dyn ByteStore = &mut store;

    dyn_store.set(0, 42).unwrap();
    dyn_store.write_at(1, &[1, 2]).unwrap();

    assert_eq!(dyn_store.get(0).unwrap(), 42);
    assert_eq!(store.data(), &[42, 1, 2, EMPTY_MARKER]);
}

#[test]
fn test_last_address_is_accessible() {
    let mut store = MemoryStore::new(16);

    store.set(15, 7).unwrap();
    assert_eq!(store.get(15).unwrap(), 7);
}

#[test]
fn test_first_missing_address_is_out_of_range() {
    let store = MemoryStore::new(16);

    let result = store.get(16);
    assert!(matches!(
        result,
        Err(FramError::OutOfRange { offset: 16, capacity: 16 })
    ));
}

// =============================================================================
// Batch Tests
// =============================================================================

#[test]
fn test_fill_ascending_range() {
    let mut store = MemoryStore::with_data(vec![0; 10]);

    store.fill(4, 6, EMPTY_MARKER).unwrap();

    assert_eq!(&store.data()[..4], &[0; 4]);
    assert!(store.data()[4..].iter().all(|b| *b == EMPTY_MARKER));
}

#[test]
fn test_sync_is_noop() {
    let mut store = MemoryStore::new(2);
    store.sync().unwrap();
    assert_eq!(store.into_data(), vec![EMPTY_MARKER; 2]);
}
