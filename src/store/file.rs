//! File-backed store
//!
//! A fixed-size image file standing in for the chip. Byte `i` of the file
//! is address `i` of the store; there is no header.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{FramError, Result};
use crate::EMPTY_MARKER;

use super::{check_offset, check_span, ByteStore};

/// A store persisted to an image file.
///
/// Reads are served from an in-memory mirror loaded at open. Writes go
/// through to the file immediately; `sync()` makes them durable.
///
/// # Example
///
/// ```no_run
/// use framkv::{ByteStore, FileStore};
/// use std::path::Path;
///
/// let mut store = FileStore::open(Path::new("fram.img"), 8192).unwrap();
/// store.write_at(0, b"hello").unwrap();
/// store.sync().unwrap();
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: File,
    mirror: Vec<u8>,
}

impl FileStore {
    /// Open an image of exactly `capacity` bytes, creating a blank one
    /// (all empty markers) if the file does not exist.
    pub fn open(path: &Path, capacity: usize) -> Result<Self> {
        let existed = path.exists();

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let mirror = if existed {
            let actual = file.metadata()?.len();
            if actual != capacity as u64 {
                return Err(FramError::ImageSizeMismatch {
                    expected: capacity,
                    actual,
                });
            }
            let mut mirror = Vec::with_capacity(capacity);
            file.read_to_end(&mut mirror)?;
            mirror
        } else {
            let mirror = vec![EMPTY_MARKER; capacity];
            file.write_all(&mirror)?;
            file.sync_all()?;
            tracing::debug!(path = %path.display(), capacity, "created blank image");
            mirror
        };

        Ok(Self {
            path: path.to_path_buf(),
            file,
            mirror,
        })
    }

    /// Open an image, creating parent directories if needed
    pub fn open_with_create_dirs(path: &Path, capacity: usize) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::open(path, capacity)
    }

    /// Path to the image file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_through(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset as u64))?;
        self.file.write_all(data)?;
        self.mirror[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }
}

impl ByteStore for FileStore {
    fn len(&self) -> usize {
        self.mirror.len()
    }

    fn get(&self, offset: usize) -> Result<u8> {
        check_offset(offset, self.mirror.len())?;
        Ok(self.mirror[offset])
    }

    fn set(&mut self, offset: usize, value: u8) -> Result<()> {
        check_offset(offset, self.mirror.len())?;
        self.write_through(offset, &[value])
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        check_span(offset, data.len(), self.mirror.len())?;
        self.write_through(offset, data)
    }

    fn fill(&mut self, offset: usize, len: usize, value: u8) -> Result<()> {
        check_span(offset, len, self.mirror.len())?;
        self.write_through(offset, &vec![value; len])
    }

    fn sync(&mut self) -> Result<()> {
        self.file.sync_all()?;
        Ok(())
    }
}
