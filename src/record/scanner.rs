//! Record Scanner
//!
//! Reads a record forward from its start address until the terminator.

use bytes::Bytes;

use crate::error::{FramError, Result};
use crate::store::{check_offset, ByteStore};
use crate::EMPTY_MARKER;

/// Lazy, forward-only iterator over the bytes of one record.
///
/// Stops at the first empty marker, which is not yielded. If the end of
/// the store is reached first, yields a single `UnterminatedRecord` error
/// and stops; addresses past the store are never read. Call
/// [`RecordScanner::read`] again to restart.
pub struct RecordScanner<'a, S: ByteStore + ?Sized> {
    store: &'a S,
    /// Address the scan started from
    start: usize,
    /// Next address to read
    position: usize,
    /// Store capacity
    end: usize,
    finished: bool,
}

impl<'a, S: ByteStore + ?Sized> RecordScanner<'a, S> {
    /// Begin scanning the record at `start`.
    ///
    /// Fails with `OutOfRange` before any read if `start` is not an
    /// address of the store.
    pub fn read(store: &'a S, start: usize) -> Result<Self> {
        let end = store.len();
        check_offset(start, end)?;
        Ok(Self {
            store,
            start,
            position: start,
            end,
            finished: false,
        })
    }

    /// Number of record bytes yielded so far
    pub fn scanned(&self) -> usize {
        self.position - self.start
    }

    /// Drain the scan into a contiguous buffer
    pub fn into_bytes(self) -> Result<Bytes> {
        self.collect::<Result<Vec<u8>>>().map(Bytes::from)
    }
}

impl<'a, S: ByteStore + ?Sized> Iterator for RecordScanner<'a, S> {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.position >= self.end {
            self.finished = true;
            return Some(Err(FramError::UnterminatedRecord {
                start: self.start,
                scanned: self.scanned(),
            }));
        }

        match self.store.get(self.position) {
            Ok(EMPTY_MARKER) => {
                self.finished = true;
                None
            }
            Ok(byte) => {
                self.position += 1;
                Some(Ok(byte))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a, S: ByteStore + ?Sized> std::iter::FusedIterator for RecordScanner<'a, S> {}
