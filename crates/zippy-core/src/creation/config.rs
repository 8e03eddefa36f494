//! Configuration for pack operations.

use crate::Result;
use crate::ZippyError;

/// Configuration for packing a directory into an archive.
///
/// # Examples
///
/// ```
/// use zippy_core::PackConfig;
///
/// let config = PackConfig::default()
///     .with_compression_level(9)
///     .with_sort_entries(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    /// Compression level.
    ///
    /// `Some(0)` stores entries uncompressed, `Some(1..=9)` deflates with
    /// that level, `None` deflates with [`PackConfig::DEFAULT_COMPRESSION_LEVEL`].
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Walk the source tree in lexicographic order.
    ///
    /// Without it entry order follows the filesystem, so two packs of the
    /// same tree may list entries differently.
    ///
    /// Default: `false`.
    pub sort_entries: bool,
}

impl PackConfig {
    /// Deflate level used when none is configured.
    pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

    /// Highest accepted compression level.
    pub const MAX_COMPRESSION_LEVEL: u8 = 9;

    /// Creates a new `PackConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level (0 = stored, 1-9 = deflate).
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Enables or disables deterministic entry order.
    #[must_use]
    pub fn with_sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Checks that all settings are in range.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > Self::MAX_COMPRESSION_LEVEL
        {
            return Err(ZippyError::InvalidConfiguration {
                reason: format!(
                    "compression level {level} is out of range 0-{}",
                    Self::MAX_COMPRESSION_LEVEL
                ),
            });
        }
        Ok(())
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            compression_level: Some(Self::DEFAULT_COMPRESSION_LEVEL),
            sort_entries: false,
        }
    }
}
