//! Engine Module
//!
//! Owns a store and runs region and record operations against it.
//!
//! ## Responsibilities
//! - Validate the store against the configuration on open
//! - Run each erase/write/read/dump as one atomic section
//! - Apply the configured payload check to every write
//! - Sync the store on close

use std::path::Path;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{FramError, Result};
use crate::record::{Record, RecordScanner, RecordWriter};
use crate::region::{RegionDumper, RegionEraser};
use crate::store::{ByteStore, FileStore, MemoryStore};
use crate::EMPTY_MARKER;

/// The region engine
///
/// ## Concurrency Model
///
/// One `Mutex` guards the whole store. Every public operation holds it for
/// its full duration, so a record write can never interleave with another
/// write, erase or scan. Scans are collected into `Bytes` before the lock
/// is released; use [`Engine::with_store`] to drive a lazy scan under the
/// lock instead.
pub struct Engine<S: ByteStore> {
    /// Engine configuration
    config: Config,

    /// The region (exclusive access per operation)
    store: Mutex<S>,
}

impl Engine<MemoryStore> {
    /// Create an engine over a blank in-memory region of `config.capacity`
    pub fn in_memory(config: Config) -> Result<Self> {
        config.validate()?;
        let store = MemoryStore::new(config.capacity);
        Self::new(store, config)
    }
}

impl Engine<FileStore> {
    /// Open or create the image at `config.image_path`
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        let store = FileStore::open_with_create_dirs(&config.image_path, config.capacity)?;
        tracing::debug!(
            image = %config.image_path.display(),
            capacity = config.capacity,
            "image opened"
        );
        Self::new(store, config)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified image path
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().image_path(path).build();
        Self::open(config)
    }
}

impl<S: ByteStore> Engine<S> {
    /// Wrap an existing store
    ///
    /// The store must hold exactly `config.capacity` bytes.
    pub fn new(store: S, config: Config) -> Result<Self> {
        config.validate()?;
        if store.len() != config.capacity {
            return Err(FramError::Config(format!(
                "store holds {} bytes but capacity is configured as {}",
                store.len(),
                config.capacity
            )));
        }

        Ok(Self {
            config,
            store: Mutex::new(store),
        })
    }

    /// Erase `[start, start + length)` back to the empty marker
    pub fn erase(&self, start: usize, length: usize) -> Result<Duration> {
        let mut store = self.store.lock();
        RegionEraser::new(&mut *store)
            .erase(start, length)
            .inspect_err(|e| tracing::warn!(start, length, "erase rejected: {}", e))
    }

    /// Erase the whole region
    pub fn reset(&self) -> Result<Duration> {
        self.erase(0, self.config.capacity)
    }

    /// Write `start_sep ++ payload ++ end_sep ++ 0xFF` at `start`
    pub fn write(
        &self,
        payload: &[u8],
        start: usize,
        start_sep: &[u8],
        end_sep: &[u8],
    ) -> Result<Duration> {
        let mut store = self.store.lock();
        RecordWriter::new(&mut *store)
            .with_payload_check(self.config.payload_check)
            .write(payload, start, start_sep, end_sep)
            .inspect_err(|e| tracing::warn!(start, "write rejected: {}", e))
    }

    /// Write an owned record at `start`
    pub fn write_record(&self, record: &Record, start: usize) -> Result<Duration> {
        self.write(&record.payload, start, &record.start_sep, &record.end_sep)
    }

    /// Read the record at `start` up to (not including) its terminator
    pub fn read(&self, start: usize) -> Result<Bytes> {
        let store = self.store.lock();
        let record = RecordScanner::read(&*store, start)?.into_bytes()?;
        tracing::debug!(start, bytes = record.len(), "record read");
        Ok(record)
    }

    /// Every non-empty byte of the region, in address order
    pub fn dump(&self) -> Result<Bytes> {
        let store = self.store.lock();
        let bytes = RegionDumper::dump_all(&*store).collect::<Result<Vec<u8>>>()?;
        tracing::debug!(bytes = bytes.len(), capacity = self.config.capacity, "region dumped");
        Ok(Bytes::from(bytes))
    }

    /// Number of addresses not holding the empty marker
    pub fn used_bytes(&self) -> Result<usize> {
        let store = self.store.lock();
        let mut used = 0;
        for offset in 0..store.len() {
            if store.get(offset)? != EMPTY_MARKER {
                used += 1;
            }
        }
        Ok(used)
    }

    /// Run `f` with shared access to the locked store
    pub fn with_store<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let store = self.store.lock();
        f(&*store)
    }

    /// Make all previous writes durable
    pub fn sync(&self) -> Result<()> {
        self.store.lock().sync()
    }

    /// Close the engine gracefully
    ///
    /// Syncs the store to ensure all data is durable
    pub fn close(self) -> Result<()> {
        self.store.into_inner().sync()
    }

    /// Take back the underlying store
    pub fn into_inner(self) -> S {
        self.store.into_inner()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Total addressable bytes
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
