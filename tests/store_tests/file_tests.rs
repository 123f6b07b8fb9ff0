//! Tests for FileStore
//!
//! These tests verify:
//! - Image creation and size checks
//! - Write-through and persistence across reopen
//! - Record operations on a file-backed store

use std::path::PathBuf;

use framkv::{ByteStore, FileStore, FramError, RecordScanner, RecordWriter, EMPTY_MARKER};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_image() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("fram.img");
    (temp_dir, image_path)
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_creates_full_size_image() {
    let (_temp, path) = setup_temp_image();

    let store = FileStore::open(&path, 8192).unwrap();

    assert_eq!(store.len(), 8192);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 8192);
}

#[test]
fn test_open_rejects_larger_image() {
    let (_temp, path) = setup_temp_image();
    std::fs::write(&path, vec![EMPTY_MARKER; 100]).unwrap();

    let result = FileStore::open(&path, 64);

    assert!(matches!(
        result,
        Err(FramError::ImageSizeMismatch { expected: 64, actual: 100 })
    ));
}

#[test]
fn test_open_existing_image_reads_contents() {
    let (_temp, path) = setup_temp_image();
    let mut raw = vec![EMPTY_MARKER; 16];
    raw[..3].copy_from_slice(b"old");
    std::fs::write(&path, &raw).unwrap();

    let store = FileStore::open(&path, 16).unwrap();

    assert_eq!(store.get(0).unwrap(), b'o');
    assert_eq!(store.get(2).unwrap(), b'd');
    assert_eq!(store.get(3).unwrap(), EMPTY_MARKER);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_record_survives_reopen() {
    let (_temp, path) = setup_temp_image();

    {
        let mut store = FileStore::open(&path, 256).unwrap();
        RecordWriter::new(&mut store).write(b"durable", 10, b"[", b"]").unwrap();
        store.sync().unwrap();
    }

    let store = FileStore::open(&path, 256).unwrap();
    let record = RecordScanner::read(&store, 10).unwrap().into_bytes().unwrap();
    assert_eq!(&record[..], b"[durable]");
}

#[test]
fn test_failed_write_does_not_touch_image() {
    let (_temp, path) = setup_temp_image();

    let mut store = FileStore::open(&path, 8).unwrap();
    let result = RecordWriter::new(&mut store).write(b"too long", 0, b"", b"");
    assert!(matches!(result, Err(FramError::CapacityExceeded { .. })));

    let raw = std::fs::read(&path).unwrap();
    assert!(raw.iter().all(|b| *b == EMPTY_MARKER));
}
