//! Region Dumper
//!
//! Sequential iteration over every non-empty byte in the store.

use crate::error::Result;
use crate::store::ByteStore;
use crate::EMPTY_MARKER;

/// Iterator over all non-empty bytes, address 0 first.
///
/// Empty markers are skipped, not treated as terminators. A store error
/// is yielded once and ends the iteration.
pub struct RegionDumper<'a, S: ByteStore + ?Sized> {
    store: &'a S,
    /// Next address to visit
    position: usize,
    /// Stop when position reaches this
    end: usize,
}

impl<'a, S: ByteStore + ?Sized> RegionDumper<'a, S> {
    /// Start a fresh dump of the whole store
    pub fn dump_all(store: &'a S) -> Self {
        Self {
            store,
            position: 0,
            end: store.len(),
        }
    }
}

impl<'a, S: ByteStore + ?Sized> Iterator for RegionDumper<'a, S> {
    type Item = Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.end {
            let offset = self.position;
            self.position += 1;

            match self.store.get(offset) {
                Ok(EMPTY_MARKER) => continue,
                Ok(byte) => return Some(Ok(byte)),
                Err(e) => {
                    self.position = self.end;
                    return Some(Err(e));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end - self.position))
    }
}

impl<'a, S: ByteStore + ?Sized> std::iter::FusedIterator for RegionDumper<'a, S> {}
