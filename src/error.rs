//! Error types for framkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FramError
pub type Result<T> = std::result::Result<T, FramError>;

/// Unified error type for framkv operations
#[derive(Debug, Error)]
pub enum FramError {
    // -------------------------------------------------------------------------
    // Address Errors
    // -------------------------------------------------------------------------
    #[error("address {offset} is out of range; valid addresses are 0..{capacity}")]
    OutOfRange { offset: usize, capacity: usize },

    #[error("cannot erase {length} bytes; the region only holds {capacity} bytes")]
    LengthExceedsCapacity { length: usize, capacity: usize },

    #[error(
        "cannot erase {length} bytes from address {start}; start must be <= {max_start}, missing {missing} byte(s)"
    )]
    RangeOverflow {
        start: usize,
        length: usize,
        max_start: usize,
        missing: usize,
    },

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error(
        "record of {footprint} bytes does not fit at address {start}; latest valid start is {}, missing {missing} byte(s)",
        describe_start(.max_start)
    )]
    CapacityExceeded {
        start: usize,
        /// Separators + payload + terminator
        footprint: usize,
        /// `None` when the record cannot fit anywhere
        max_start: Option<usize>,
        missing: usize,
    },

    #[error("record byte {index} holds the reserved empty marker 0xFF")]
    InvalidPayloadByte { index: usize },

    #[error("record at address {start} has no terminator; scanned {scanned} byte(s) to the end of the region")]
    UnterminatedRecord { start: usize, scanned: usize },

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image holds {actual} bytes, expected {expected}")]
    ImageSizeMismatch { expected: usize, actual: u64 },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

fn describe_start(max_start: &Option<usize>) -> String {
    match max_start {
        Some(start) => start.to_string(),
        None => "none".to_string(),
    }
}
