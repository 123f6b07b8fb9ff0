//! Record Writer
//!
//! Places a delimiter-wrapped record at a caller-chosen address.

use std::time::{Duration, Instant};

use crate::config::PayloadCheck;
use crate::error::{FramError, Result};
use crate::store::ByteStore;
use crate::EMPTY_MARKER;

use super::{compose, Record, RecordLayout};

/// Writes records into a store
pub struct RecordWriter<'a, S: ByteStore + ?Sized> {
    store: &'a mut S,
    payload_check: PayloadCheck,
}

impl<'a, S: ByteStore + ?Sized> RecordWriter<'a, S> {
    /// Writer that rejects marker-valued record bytes
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            payload_check: PayloadCheck::Reject,
        }
    }

    pub fn with_payload_check(mut self, check: PayloadCheck) -> Self {
        self.payload_check = check;
        self
    }

    /// Write `start_sep ++ payload ++ end_sep ++ 0xFF` starting at `start`.
    ///
    /// Whatever was at the touched addresses is overwritten. Validation
    /// happens before the first byte is written, so a failed call leaves
    /// the store as it was. Returns the time spent writing.
    pub fn write(
        &mut self,
        payload: &[u8],
        start: usize,
        start_sep: &[u8],
        end_sep: &[u8],
    ) -> Result<Duration> {
        let layout = RecordLayout::new(start_sep.len(), payload.len(), end_sep.len());
        layout.check_fits(start, self.store.len())?;

        if self.payload_check == PayloadCheck::Reject {
            let mut body = start_sep.iter().chain(payload).chain(end_sep);
            if let Some(index) = body.position(|b| *b == EMPTY_MARKER) {
                return Err(FramError::InvalidPayloadByte { index });
            }
        }

        let run = compose(start_sep, payload, end_sep, true);

        tracing::debug!(
            start,
            end = layout.terminator_offset(start),
            bytes = layout.body_len(),
            "writing record"
        );
        let started = Instant::now();
        self.store.write_at(start, &run)?;
        let elapsed = started.elapsed();
        tracing::debug!(bytes = payload.len(), ?elapsed, "record written");

        Ok(elapsed)
    }

    /// Write an owned [`Record`] starting at `start`
    pub fn write_record(&mut self, record: &Record, start: usize) -> Result<Duration> {
        self.write(&record.payload, start, &record.start_sep, &record.end_sep)
    }
}
