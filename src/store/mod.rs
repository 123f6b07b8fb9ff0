//! Store Module
//!
//! The byte-addressable medium the region lives on.
//!
//! ## Responsibilities
//! - Expose a fixed number of addressable bytes
//! - Read and write single bytes by address
//! - Optionally batch contiguous writes (`write_at`, `fill`)
//!
//! The store knows nothing about records or the empty marker. Bus setup,
//! chip select and clock rate belong to whoever implements the trait.
//!
//! ## Implementations
//! - [`MemoryStore`] - `Vec<u8>` backed, for tests and ephemeral use
//! - [`FileStore`] - fixed-size image file standing in for a chip

mod memory;
mod file;

pub use memory::MemoryStore;
pub use file::FileStore;

use crate::error::{FramError, Result};

/// A fixed-capacity, byte-addressable store.
///
/// # Invariants
///
/// - `len()` never changes for the lifetime of the store
/// - `get`/`set` fail with `OutOfRange` outside `0..len()`
/// - Every call completes before the next one is issued
pub trait ByteStore: Send {
    /// Total number of addressable bytes
    fn len(&self) -> usize;

    /// Read the byte at `offset`
    fn get(&self, offset: usize) -> Result<u8>;

    /// Overwrite the byte at `offset`
    fn set(&mut self, offset: usize, value: u8) -> Result<()>;

    /// Whether the store has no addressable bytes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write `data` to consecutive addresses starting at `offset`.
    ///
    /// The whole range is validated before the first byte is written.
    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        check_span(offset, data.len(), self.len())?;
        for (i, byte) in data.iter().enumerate() {
            self.set(offset + i, *byte)?;
        }
        Ok(())
    }

    /// Set `len` consecutive addresses starting at `offset` to `value`, in
    /// ascending address order.
    fn fill(&mut self, offset: usize, len: usize, value: u8) -> Result<()> {
        check_span(offset, len, self.len())?;
        for position in offset..offset + len {
            self.set(position, value)?;
        }
        Ok(())
    }

    /// Make previous writes durable. No-op for volatile stores.
    fn sync(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Fail with `OutOfRange` unless `offset` addresses a byte of the store.
pub(crate) fn check_offset(offset: usize, capacity: usize) -> Result<()> {
    if offset >= capacity {
        return Err(FramError::OutOfRange { offset, capacity });
    }
    Ok(())
}

/// Fail with `OutOfRange` unless `[offset, offset + len)` lies inside the store.
///
/// The reported offset is the first address that does not exist.
pub(crate) fn check_span(offset: usize, len: usize, capacity: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(FramError::OutOfRange {
            offset: offset.max(capacity),
            capacity,
        }),
    }
}
