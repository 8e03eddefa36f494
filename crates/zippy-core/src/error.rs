//! Error types for pack and unpack operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::PathRole;

/// Result type alias using `ZippyError`.
pub type Result<T> = std::result::Result<T, ZippyError>;

/// Reason a candidate path was rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathProblem {
    /// The path is empty.
    Empty,
    /// The path starts with a separator or is absolute by platform rules.
    Absolute,
    /// The path does not end with the required suffix.
    MissingSuffix {
        /// The suffix that was required.
        suffix: &'static str,
    },
    /// The name before the required suffix is empty, `.` or `..`.
    EmptyStem {
        /// The suffix that was required.
        suffix: &'static str,
    },
}

impl std::fmt::Display for PathProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "path is empty"),
            Self::Absolute => write!(
                f,
                "must be a relative path that doesn't start with a \"/\" character"
            ),
            Self::MissingSuffix { suffix } => write!(f, "must be of type {suffix}"),
            Self::EmptyStem { suffix } => write!(f, "needs a name before the {suffix} suffix"),
        }
    }
}

/// Broad category of a [`ZippyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected input detected before any I/O.
    Validation,
    /// A required source directory or archive is missing.
    NotFound,
    /// The archive library could not open or create the archive.
    Open,
    /// Adding, enumerating or reading a single entry failed.
    Entry,
    /// Finalizing the archive failed.
    Commit,
    /// A local filesystem operation failed.
    Io,
}

impl ErrorKind {
    /// Stable upper-case code for machine-readable output.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION",
            Self::NotFound => "NOT_FOUND",
            Self::Open => "OPEN",
            Self::Entry => "ENTRY",
            Self::Commit => "COMMIT",
            Self::Io => "IO_ERROR",
        }
    }
}

/// Errors that can occur while packing or unpacking an archive.
#[derive(Error, Debug)]
pub enum ZippyError {
    /// A path argument failed validation.
    #[error("invalid {role} path \"{path}\": {problem}")]
    InvalidPath {
        /// Which argument was rejected.
        role: PathRole,
        /// The rejected path as given.
        path: String,
        /// Why it was rejected.
        problem: PathProblem,
    },

    /// Configuration values are out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the offending setting.
        reason: String,
    },

    /// The directory to pack does not exist or is not a directory.
    #[error("the data folder \"{}\" does not exist", path.display())]
    SourceNotFound {
        /// Resolved source path.
        path: PathBuf,
    },

    /// The archive to unpack does not exist.
    #[error("the zip file \"{}\" does not exist", path.display())]
    ArchiveNotFound {
        /// Resolved archive path.
        path: PathBuf,
    },

    /// The archive library failed to open or create the archive.
    #[error("failed to open zip file \"{}\": {reason}", path.display())]
    Open {
        /// Resolved archive path.
        path: PathBuf,
        /// Error text reported by the archive library.
        reason: String,
    },

    /// A single entry could not be added, enumerated or read.
    #[error("entry \"{entry}\": {reason}")]
    Entry {
        /// Relative entry name (or index when the name is unavailable).
        entry: String,
        /// Error text reported by the archive library.
        reason: String,
    },

    /// The archive could not be finalized.
    #[error("failed to save the zip file \"{}\": {reason}", path.display())]
    Commit {
        /// Resolved archive path.
        path: PathBuf,
        /// Error text reported by the archive library.
        reason: String,
    },

    /// A local filesystem operation failed.
    #[error("I/O error at \"{}\": {source}", path.display())]
    Io {
        /// Path being created, removed or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl ZippyError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds an entry error from anything displayable.
    pub fn entry(entry: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Entry {
            entry: entry.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the taxonomy category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use zippy_core::ZippyError;
    /// use zippy_core::error::ErrorKind;
    /// use std::path::PathBuf;
    ///
    /// let err = ZippyError::ArchiveNotFound {
    ///     path: PathBuf::from("missing.zip"),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPath { .. } | Self::InvalidConfiguration { .. } => ErrorKind::Validation,
            Self::SourceNotFound { .. } | Self::ArchiveNotFound { .. } => ErrorKind::NotFound,
            Self::Open { .. } => ErrorKind::Open,
            Self::Entry { .. } => ErrorKind::Entry,
            Self::Commit { .. } => ErrorKind::Commit,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Stable upper-case code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns `true` if the error was raised before touching the filesystem.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }

    /// Returns the archive library's error text, if this error carries one.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Open { reason, .. } | Self::Entry { reason, .. } | Self::Commit { reason, .. } => {
                Some(reason)
            }
            Self::InvalidConfiguration { reason } => Some(reason),
            _ => None,
        }
    }
}
