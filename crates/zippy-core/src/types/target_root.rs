//! Resolved source and destination directories.

use std::path::Path;
use std::path::PathBuf;

use super::ArchivePath;
use super::EntryRecord;

/// Absolute directory a pipeline walks from (pack) or writes into (unpack).
///
/// Derived once per operation from a validated [`ArchivePath`] and a base
/// directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zippy_core::types::ArchivePath;
/// use zippy_core::types::PathRole;
/// use zippy_core::types::TargetRoot;
/// use zippy_core::types::ZIP_SUFFIX;
///
/// let archive = ArchivePath::validate("out.zip", PathRole::Input, Some(ZIP_SUFFIX))?;
/// let root = TargetRoot::unpack_destination(Path::new("/work"), &archive);
/// assert_eq!(root.as_path(), Path::new("/work/out"));
/// # Ok::<(), zippy_core::ZippyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRoot(PathBuf);

impl TargetRoot {
    /// Resolves `path` against `base`.
    #[must_use]
    pub fn resolve(base: &Path, path: &ArchivePath) -> Self {
        Self(base.join(path.as_path()))
    }

    /// Directory an archive unpacks into: its path without the suffix.
    #[must_use]
    pub fn unpack_destination(base: &Path, archive: &ArchivePath) -> Self {
        Self(base.join(archive.stem()))
    }

    /// Returns the resolved path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Filesystem location of an entry below this root.
    #[must_use]
    pub fn join(&self, record: &EntryRecord) -> PathBuf {
        self.0.join(record.relative_path())
    }
}

impl AsRef<Path> for TargetRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
