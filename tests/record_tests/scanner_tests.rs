//! Tests for RecordScanner
//!
//! These tests verify:
//! - Scans stop at the first marker
//! - Laziness (only the consumed prefix is read)
//! - The unterminated-record boundary case

use std::cell::Cell;

use framkv::{ByteStore, FramError, MemoryStore, RecordScanner, RecordWriter, Result, EMPTY_MARKER};

// =============================================================================
// Helper Functions
// =============================================================================

/// Store that counts reads, to observe laziness
struct CountingStore {
    inner: MemoryStore,
    reads: Cell<usize>,
}

impl ByteStore for CountingStore {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, offset: usize) -> Result<u8> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get(offset)
    }

    fn set(&mut self, offset: usize, value: u8) -> Result<()> {
        self.inner.set(offset, value)
    }
}

// =============================================================================
// Scan Tests
// =============================================================================

#[test]
fn test_roundtrip_with_empty_separators() {
    let mut store = MemoryStore::new(8192);
    RecordWriter::new(&mut store).write(b"AB", 0, b"", b"").unwrap();

    let bytes: Vec<u8> = RecordScanner::read(&store, 0)
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(bytes, vec![b'A', b'B']);
}

#[test]
fn test_scan_includes_separators() {
    let mut store = MemoryStore::new(64);
    RecordWriter::new(&mut store).write(b"mid", 7, b"<<", b">>").unwrap();

    let bytes = RecordScanner::read(&store, 7).unwrap().into_bytes().unwrap();

    assert_eq!(&bytes[..], b"<<mid>>");
}

#[test]
fn test_blank_address_yields_empty_sequence() {
    let store = MemoryStore::new(64);

    let bytes = RecordScanner::read(&store, 63).unwrap().into_bytes().unwrap();

    assert!(bytes.is_empty());
}

#[test]
fn test_start_out_of_range_fails_before_reading() {
    let store = CountingStore {
        inner: MemoryStore::new(8),
        reads: Cell::new(0),
    };

    let result = RecordScanner::read(&store, 8);

    assert!(matches!(result, Err(FramError::OutOfRange { offset: 8, capacity: 8 })));
    assert_eq!(store.reads.get(), 0);
}

// =============================================================================
// Laziness Tests
// =============================================================================

#[test]
fn test_scan_reads_only_what_is_consumed() {
    let mut inner = MemoryStore::new(64);
    RecordWriter::new(&mut inner).write(b"abcdefgh", 0, b"", b"").unwrap();
    let store = CountingStore {
        inner,
        reads: Cell::new(0),
    };

    let taken: Vec<u8> = RecordScanner::read(&store, 0)
        .unwrap()
        .take(3)
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(taken, b"abc");
    assert_eq!(store.reads.get(), 3);
}

#[test]
fn test_full_scan_reads_record_plus_terminator() {
    let mut inner = MemoryStore::new(64);
    RecordWriter::new(&mut inner).write(b"abcd", 10, b"", b"").unwrap();
    let store = CountingStore {
        inner,
        reads: Cell::new(0),
    };

    let mut scanner = RecordScanner::read(&store, 10).unwrap();
    let count = scanner.by_ref().filter_map(|b| b.ok()).count();

    assert_eq!(count, 4);
    assert_eq!(scanner.scanned(), 4);
    assert_eq!(store.reads.get(), 5);
}

// =============================================================================
// Boundary Tests
// =============================================================================

#[test]
fn test_unterminated_scan_stops_at_capacity() {
    let mut data = vec![EMPTY_MARKER; 16];
    data[12..].copy_from_slice(b"tail");
    let store = MemoryStore::with_data(data);

    let results: Vec<Result<u8>> = RecordScanner::read(&store, 12).unwrap().collect();

    assert_eq!(results.len(), 5);
    assert!(results[..4].iter().all(|r| r.is_ok()));
    assert!(matches!(
        results[4],
        Err(FramError::UnterminatedRecord { start: 12, scanned: 4 })
    ));
}

#[test]
fn test_unterminated_scan_into_bytes_is_an_error() {
    let store = MemoryStore::with_data(b"no marker".to_vec());

    let result = RecordScanner::read(&store, 0).unwrap().into_bytes();

    assert!(matches!(result, Err(FramError::UnterminatedRecord { start: 0, scanned: 9 })));
}
