//! Unpack operation reporting.

use std::path::PathBuf;
use std::time::Duration;

/// Report of an unpack operation.
#[derive(Debug, Clone, Default)]
pub struct UnpackReport {
    /// Directory the archive was unpacked into.
    pub destination: PathBuf,

    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directory entries created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the operation.
    pub duration: Duration,
}

impl UnpackReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of entries processed.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}
