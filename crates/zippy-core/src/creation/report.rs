//! Pack operation reporting.

use std::path::PathBuf;
use std::time::Duration;

/// Report of a pack operation.
///
/// # Examples
///
/// ```
/// use zippy_core::PackReport;
///
/// let mut report = PackReport::default();
/// report.bytes_written = 1024;
/// report.bytes_compressed = 256;
/// assert_eq!(report.compression_ratio(), 4.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Resolved path of the archive that was written.
    pub archive: PathBuf,

    /// Number of file entries added.
    pub files_added: usize,

    /// Number of directory entries added.
    pub directories_added: usize,

    /// Uncompressed bytes read from source files.
    pub bytes_written: u64,

    /// Size of the finished archive on disk.
    pub bytes_compressed: u64,

    /// Filesystem objects that were neither files nor directories.
    pub entries_skipped: usize,

    /// Warnings generated while walking the source.
    pub warnings: Vec<String>,

    /// Duration of the operation.
    pub duration: Duration,
}

impl PackReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Total entries written to the archive.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files_added + self.directories_added
    }

    /// Uncompressed size divided by archive size (`0.0` for an empty archive).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }
}
