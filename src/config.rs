//! Configuration for framkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{FramError, Result};
use crate::DEFAULT_CAPACITY;

/// Main configuration for a framkv region
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Region Configuration
    // -------------------------------------------------------------------------
    /// Total number of addressable bytes (fixed for the lifetime of a store)
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Image Configuration
    // -------------------------------------------------------------------------
    /// Backing image for the file store. Byte `i` of the file is address `i`.
    pub image_path: PathBuf,

    // -------------------------------------------------------------------------
    // Record Configuration
    // -------------------------------------------------------------------------
    /// What to do with record bytes equal to the empty marker
    pub payload_check: PayloadCheck,
}

/// Handling of 0xFF bytes inside a record body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadCheck {
    /// Refuse the write with `InvalidPayloadByte` (a scan would stop early)
    Reject,

    /// Write the bytes as given; scans will truncate at the first 0xFF
    Unchecked,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            image_path: PathBuf::from("./fram.img"),
            payload_check: PayloadCheck::Reject,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config describes a usable region
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(FramError::Config("capacity must be at least 1 byte".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the region capacity (in bytes)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the image file path
    pub fn image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.image_path = path.into();
        self
    }

    /// Set how marker-valued record bytes are handled
    pub fn payload_check(mut self, check: PayloadCheck) -> Self {
        self.config.payload_check = check;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
