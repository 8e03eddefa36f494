//! Source tree walking.
//!
//! Produces one [`EntryRecord`] per file or directory below the root, depth
//! first. The root itself is not reported.

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::PackConfig;
use crate::Result;
use crate::ZippyError;
use crate::types::EntryKind;
use crate::types::EntryRecord;

/// A filesystem object paired with the record it becomes in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedEntry {
    /// Full filesystem path.
    pub path: PathBuf,

    /// Archive record relative to the walk root.
    pub record: EntryRecord,
}

/// One step of a source walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// A file or directory to archive.
    Entry(WalkedEntry),

    /// Something that cannot be archived.
    Skipped {
        /// Full filesystem path.
        path: PathBuf,
        /// Why it was skipped.
        reason: String,
    },
}

/// Walks a source directory for packing.
///
/// Symlinks are classified by their target: a link to a file becomes a file
/// entry with the target's content, a link to a directory becomes a directory
/// entry and is not descended into.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zippy_core::PackConfig;
/// use zippy_core::creation::walker::SourceWalker;
/// use zippy_core::creation::walker::WalkOutcome;
///
/// let config = PackConfig::default();
/// let walker = SourceWalker::new(Path::new("project"), &config);
/// for outcome in walker.walk() {
///     if let WalkOutcome::Entry(entry) = outcome? {
///         println!("{}", entry.record);
///     }
/// }
/// # Ok::<(), zippy_core::ZippyError>(())
/// ```
#[derive(Debug)]
pub struct SourceWalker<'a> {
    root: &'a Path,
    config: &'a PackConfig,
    exclude: Option<PathBuf>,
}

impl<'a> SourceWalker<'a> {
    /// Creates a walker over `root`.
    #[must_use]
    pub fn new(root: &'a Path, config: &'a PackConfig) -> Self {
        Self {
            root,
            config,
            exclude: None,
        }
    }

    /// Leaves out the file at `path` (the archive being written, when it
    /// lies inside the source tree).
    #[must_use]
    pub fn excluding(mut self, path: &Path) -> Self {
        self.exclude = fs::canonicalize(path).ok();
        self
    }

    /// Root directory of the walk.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root
    }

    /// Returns an iterator over walk outcomes.
    ///
    /// # Errors
    ///
    /// Items are errors when a directory cannot be read or an entry name is
    /// not valid UTF-8.
    pub fn walk(&self) -> impl Iterator<Item = Result<WalkOutcome>> + '_ {
        let mut walker = WalkDir::new(self.root).min_depth(1).follow_links(false);
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        walker.into_iter().filter_map(move |entry| match entry {
            Ok(entry) => self.classify(&entry).transpose(),
            Err(e) => {
                let path = e.path().unwrap_or(self.root).to_path_buf();
                Some(Err(ZippyError::io(path, e.into())))
            }
        })
    }

    fn classify(&self, entry: &walkdir::DirEntry) -> Result<Option<WalkOutcome>> {
        let path = entry.path();

        let kind = if entry.path_is_symlink() {
            match fs::metadata(path) {
                Ok(meta) if meta.is_file() => Some(EntryKind::File),
                Ok(meta) if meta.is_dir() => Some(EntryKind::Directory),
                Ok(_) => None,
                Err(_) => {
                    return Ok(Some(WalkOutcome::Skipped {
                        path: path.to_path_buf(),
                        reason: "dangling symlink".into(),
                    }));
                }
            }
        } else {
            let file_type = entry.file_type();
            if file_type.is_file() {
                Some(EntryKind::File)
            } else if file_type.is_dir() {
                Some(EntryKind::Directory)
            } else {
                None
            }
        };

        let Some(kind) = kind else {
            return Ok(Some(WalkOutcome::Skipped {
                path: path.to_path_buf(),
                reason: "not a regular file or directory".into(),
            }));
        };

        if kind.is_file() && self.is_excluded(path) {
            return Ok(None);
        }

        let relative = path.strip_prefix(self.root).unwrap_or(path);
        let record = EntryRecord::from_relative_path(relative, kind).ok_or_else(|| {
            ZippyError::entry(
                relative.display().to_string(),
                "entry name is not valid UTF-8",
            )
        })?;

        Ok(Some(WalkOutcome::Entry(WalkedEntry {
            path: path.to_path_buf(),
            record,
        })))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let Some(exclude) = &self.exclude else {
            return false;
        };
        path.file_name() == exclude.file_name()
            && fs::canonicalize(path).is_ok_and(|p| p == *exclude)
    }
}
