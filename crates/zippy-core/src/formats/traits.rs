//! Capability interface over the archive library.
//!
//! The pipelines only talk to archives through these traits. The zip crate
//! backs them in [`super::zip`]; tests substitute in-memory fakes.

use std::path::Path;
use thiserror::Error;

/// Error text reported by the archive library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct BackendError {
    message: String,
}

impl BackendError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable description of the last failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<zip::result::ZipError> for BackendError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::new(err.to_string())
    }
}

/// Result type for archive library calls.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// An archive open for writing.
///
/// A sink is either committed or discarded, never both. Both consume it.
pub trait ArchiveSink {
    /// Stages the file at `source` under `name`. Returns uncompressed bytes.
    fn add_file(&mut self, name: &str, source: &Path) -> BackendResult<u64>;

    /// Stages a directory marker. `name` ends with `/`.
    fn add_directory(&mut self, name: &str) -> BackendResult<()>;

    /// Finalizes the archive. Returns its size on disk.
    ///
    /// On failure no partial archive may remain.
    fn commit(self) -> BackendResult<u64>
    where
        Self: Sized;

    /// Abandons the archive without producing an output file.
    ///
    /// Fails if a partially written file could not be removed.
    fn discard(self) -> BackendResult<()>
    where
        Self: Sized;
}

/// An archive open for reading, addressed by entry index.
pub trait ArchiveSource {
    /// Number of entries in the archive.
    fn len(&self) -> usize;

    /// Returns `true` if the archive has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored name of entry `index`.
    fn entry_name(&mut self, index: usize) -> BackendResult<String>;

    /// Uncompressed size of entry `index`.
    fn entry_size(&mut self, index: usize) -> BackendResult<u64>;

    /// Fills `buf` with the full content of entry `index`.
    ///
    /// Fails if the entry holds fewer or more bytes than `buf.len()`.
    fn read_entry(&mut self, index: usize, buf: &mut [u8]) -> BackendResult<()>;
}
