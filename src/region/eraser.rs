//! Region Eraser
//!
//! Fills an address range with the empty marker.

use std::time::{Duration, Instant};

use crate::error::{FramError, Result};
use crate::store::ByteStore;
use crate::EMPTY_MARKER;

/// Erases address ranges of a store
pub struct RegionEraser<'a, S: ByteStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: ByteStore + ?Sized> RegionEraser<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Set every address in `[start, start + length)` to the empty marker.
    ///
    /// Checks, in order:
    /// 1. `start` addresses a byte of the store (`OutOfRange`)
    /// 2. `length` is no larger than the store (`LengthExceedsCapacity`)
    /// 3. the range ends inside the store (`RangeOverflow`)
    ///
    /// Nothing is written unless all three pass. Returns the time spent
    /// writing.
    pub fn erase(&mut self, start: usize, length: usize) -> Result<Duration> {
        let capacity = self.store.len();

        if start >= capacity {
            return Err(FramError::OutOfRange {
                offset: start,
                capacity,
            });
        }
        if length > capacity {
            return Err(FramError::LengthExceedsCapacity { length, capacity });
        }
        // length <= capacity, so the subtraction cannot underflow
        let max_start = capacity - length;
        if start > max_start {
            return Err(FramError::RangeOverflow {
                start,
                length,
                max_start,
                missing: start - max_start,
            });
        }

        tracing::debug!(start, length, "erasing region");
        let started = Instant::now();
        self.store.fill(start, length, EMPTY_MARKER)?;
        let elapsed = started.elapsed();
        tracing::debug!(start, length, ?elapsed, "region erased");

        Ok(elapsed)
    }
}
