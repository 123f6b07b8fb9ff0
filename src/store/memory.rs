//! In-memory store
//!
//! `Vec<u8>` backed store for tests and ephemeral regions.

use crate::error::Result;
use crate::EMPTY_MARKER;

use super::{check_offset, check_span, ByteStore};

/// An in-memory byte store.
///
/// # Example
///
/// ```rust
/// use framkv::{ByteStore, MemoryStore};
///
/// let mut store = MemoryStore::new(16);
/// store.set(3, b'x').unwrap();
/// assert_eq!(store.get(3).unwrap(), b'x');
/// assert_eq!(store.get(4).unwrap(), 0xFF);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    data: Vec<u8>,
}

impl MemoryStore {
    /// Create a blank store (every byte is the empty marker)
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![EMPTY_MARKER; capacity],
        }
    }

    /// Create a store holding pre-existing contents
    ///
    /// Capacity is `data.len()`.
    pub fn with_data(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Borrow the raw contents
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take the raw contents
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl ByteStore for MemoryStore {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, offset: usize) -> Result<u8> {
        check_offset(offset, self.data.len())?;
        Ok(self.data[offset])
    }

    fn set(&mut self, offset: usize, value: u8) -> Result<()> {
        check_offset(offset, self.data.len())?;
        self.data[offset] = value;
        Ok(())
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        check_span(offset, data.len(), self.data.len())?;
        self.data[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn fill(&mut self, offset: usize, len: usize, value: u8) -> Result<()> {
        check_span(offset, len, self.data.len())?;
        self.data[offset..offset + len].fill(value);
        Ok(())
    }
}
