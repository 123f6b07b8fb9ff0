//! Record Module
//!
//! Delimiter-wrapped records terminated by the empty marker.
//!
//! ## Responsibilities
//! - Compute a record's footprint and check it fits at an address
//! - Write separators, payload and terminator as one contiguous run
//! - Scan a record back until its terminator
//!
//! ## Layout
//! ```text
//! start ──▶ ┌────────────┬────────────────┬──────────┬──────┐
//!           │ start sep  │    payload     │ end sep  │ 0xFF │
//!           └────────────┴────────────────┴──────────┴──────┘
//!           ◀──────────────── body_len ──────────────▶
//!           ◀─────────────────── footprint ──────────────────▶
//! ```
//!
//! Records carry no length field. A body byte equal to 0xFF would end the
//! record early on scan, so writers reject it by default.

mod writer;
mod scanner;

pub use writer::RecordWriter;
pub use scanner::RecordScanner;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FramError, Result};
use crate::EMPTY_MARKER;

/// Size bookkeeping for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    pub start_sep_len: usize,
    pub payload_len: usize,
    pub end_sep_len: usize,
}

impl RecordLayout {
    pub fn new(start_sep_len: usize, payload_len: usize, end_sep_len: usize) -> Self {
        Self {
            start_sep_len,
            payload_len,
            end_sep_len,
        }
    }

    /// Separators + payload
    pub fn body_len(&self) -> usize {
        self.start_sep_len + self.payload_len + self.end_sep_len
    }

    /// Body + terminator
    pub fn footprint(&self) -> usize {
        self.body_len() + 1
    }

    /// Address the terminator lands on for a record written at `start`
    pub fn terminator_offset(&self, start: usize) -> usize {
        start + self.body_len()
    }

    /// Latest start address at which the record still fits, if any
    pub fn max_start(&self, capacity: usize) -> Option<usize> {
        capacity.checked_sub(self.footprint())
    }

    /// Fail with `CapacityExceeded` unless the record, including its
    /// terminator, fits in `[start, capacity)`.
    pub fn check_fits(&self, start: usize, capacity: usize) -> Result<()> {
        let footprint = self.footprint();
        let end = start.saturating_add(footprint);
        if end > capacity {
            return Err(FramError::CapacityExceeded {
                start,
                footprint,
                max_start: self.max_start(capacity),
                missing: end - capacity,
            });
        }
        Ok(())
    }
}

/// An owned record: payload plus the separators that wrap it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub start_sep: Bytes,
    pub payload: Bytes,
    pub end_sep: Bytes,
}

impl Record {
    /// Record with empty separators
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    /// Record wrapped in the given separators
    pub fn with_separators(
        start_sep: impl Into<Bytes>,
        payload: impl Into<Bytes>,
        end_sep: impl Into<Bytes>,
    ) -> Self {
        Self {
            start_sep: start_sep.into(),
            payload: payload.into(),
            end_sep: end_sep.into(),
        }
    }

    pub fn layout(&self) -> RecordLayout {
        RecordLayout::new(self.start_sep.len(), self.payload.len(), self.end_sep.len())
    }

    /// The bytes a scan of this record yields: separators and payload,
    /// without the terminator
    pub fn body(&self) -> Bytes {
        compose(&self.start_sep, &self.payload, &self.end_sep, false)
    }
}

/// Concatenate the parts into one contiguous run, optionally followed by
/// the terminator.
pub(crate) fn compose(start_sep: &[u8], payload: &[u8], end_sep: &[u8], terminate: bool) -> Bytes {
    let layout = RecordLayout::new(start_sep.len(), payload.len(), end_sep.len());
    let mut run = BytesMut::with_capacity(layout.footprint());
    run.put_slice(start_sep);
    run.put_slice(payload);
    run.put_slice(end_sep);
    if terminate {
        run.put_u8(EMPTY_MARKER);
    }
    run.freeze()
}
