//! Entries produced by a source walk or an archive's entry table.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Kind of an archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    /// Regular file with content.
    File,
    /// Bare directory marker.
    Directory,
}

impl EntryKind {
    /// Returns `true` for file entries.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns `true` for directory entries.
    #[must_use]
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// A relative entry path paired with its kind.
///
/// Paths always use `/` as separator and never carry a trailing separator;
/// [`EntryRecord::archive_name`] adds one back for directories.
///
/// # Examples
///
/// ```
/// use zippy_core::types::EntryKind;
/// use zippy_core::types::EntryRecord;
///
/// let dir = EntryRecord::from_archive_name("docs/img/");
/// assert_eq!(dir.kind(), EntryKind::Directory);
/// assert_eq!(dir.path(), "docs/img");
/// assert_eq!(dir.archive_name(), "docs/img/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryRecord {
    path: String,
    kind: EntryKind,
}

impl EntryRecord {
    /// Creates a file record.
    pub fn file(path: impl Into<String>) -> Self {
        Self::new(path.into(), EntryKind::File)
    }

    /// Creates a directory record.
    pub fn directory(path: impl Into<String>) -> Self {
        Self::new(path.into(), EntryKind::Directory)
    }

    fn new(path: String, kind: EntryKind) -> Self {
        let path = path.replace('\\', "/");
        let path = path.trim_end_matches('/').to_string();
        Self { path, kind }
    }

    /// Classifies a raw archive entry name.
    ///
    /// Names ending in `/` or `\` are directory markers, anything else is a
    /// file.
    #[must_use]
    pub fn from_archive_name(name: &str) -> Self {
        if name.ends_with(['/', '\\']) {
            Self::directory(name)
        } else {
            Self::file(name)
        }
    }

    /// Builds a record from a filesystem path relative to a walk root.
    ///
    /// Returns `None` if the relative path is not valid UTF-8 or is not a
    /// plain descending path.
    #[must_use]
    pub fn from_relative_path(relative: &Path, kind: EntryKind) -> Option<Self> {
        let mut parts = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_str()?),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(Self::new(parts.join("/"), kind))
    }

    /// Relative path with `/` separators and no trailing separator.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Kind of this entry.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Name to store in the archive: directories get a trailing `/`.
    #[must_use]
    pub fn archive_name(&self) -> String {
        match self.kind {
            EntryKind::File => self.path.clone(),
            EntryKind::Directory => format!("{}/", self.path),
        }
    }

    /// Returns `true` if joining this path onto a directory stays inside it.
    ///
    /// Rejects empty paths, absolute paths, drive prefixes and `..`.
    #[must_use]
    pub fn is_contained(&self) -> bool {
        if self.path.is_empty() || self.path.starts_with('/') {
            return false;
        }
        self.path.split('/').all(|part| {
            part != ".."
                && Path::new(part)
                    .components()
                    .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        })
    }

    /// Converts the record into a platform path relative to a root.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        self.path
            .split('/')
            .filter(|part| !part.is_empty() && *part != ".")
            .collect()
    }
}

impl std::fmt::Display for EntryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.archive_name())
    }
}
