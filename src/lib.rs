//! # framkv
//!
//! Record storage over a fixed-size, byte-addressable non-volatile region
//! (an 8 KiB FRAM chip by default) with:
//! - Bounds-checked region erase
//! - Delimiter-wrapped record placement
//! - Sentinel-terminated record scans
//! - Whole-region dumps
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      framkv-cli                             │
//! │               (erase / write / read / dump)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                │
//! │           (one Mutex around the whole store)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │   region    │          │    record    │
//!   │erase / dump │          │write / scan  │
//!   └──────┬──────┘          └──────┬───────┘
//!          │                         │
//!          └────────────┬────────────┘
//!                       ▼
//!               ┌──────────────┐
//!               │  ByteStore   │
//!               │(memory/file) │
//!               └──────────────┘
//! ```
//!
//! ## Record Format
//!
//! ```text
//! ┌────────────┬────────────────┬──────────┬──────┐
//! │ start sep  │    payload     │ end sep  │ 0xFF │
//! └────────────┴────────────────┴──────────┴──────┘
//! ```
//!
//! There is no length prefix: a record ends at the first [`EMPTY_MARKER`].

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod region;
pub mod record;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FramError, Result};
pub use config::{Config, PayloadCheck};
pub use engine::Engine;
pub use store::{ByteStore, FileStore, MemoryStore};
pub use region::{RegionDumper, RegionEraser};
pub use record::{Record, RecordLayout, RecordScanner, RecordWriter};

// =============================================================================
// Constants
// =============================================================================

/// Current version of framkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved byte value meaning "no data here" and "end of record"
pub const EMPTY_MARKER: u8 = 0xFF;

/// Capacity of the reference chip (8 KiB)
pub const DEFAULT_CAPACITY: usize = 8192;
