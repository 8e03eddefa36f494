//! Validated relative path arguments.

use std::path::Path;

use crate::Result;
use crate::ZippyError;
use crate::error::PathProblem;

/// Suffix required of archive paths.
pub const ZIP_SUFFIX: &str = ".zip";

/// Which argument of an operation a path was given as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRole {
    /// Something read by the operation (source directory, archive to unpack).
    Input,
    /// Something produced by the operation (archive to write).
    Output,
}

impl std::fmt::Display for PathRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// A path argument that passed validation.
///
/// Guarantees:
/// - not empty
/// - does not begin with `/` or `\` and is not absolute by platform rules
/// - ends with the required suffix when one was requested, preceded by a
///   file name that is not `.` or `..`
///
/// Validation is a pure string check; nothing on disk is consulted.
///
/// # Examples
///
/// ```
/// use zippy_core::types::ArchivePath;
/// use zippy_core::types::PathRole;
/// use zippy_core::types::ZIP_SUFFIX;
///
/// let out = ArchivePath::validate("build/out.zip", PathRole::Output, Some(ZIP_SUFFIX))?;
/// assert_eq!(out.stem(), "build/out");
///
/// assert!(ArchivePath::validate("/tmp/out.zip", PathRole::Output, Some(ZIP_SUFFIX)).is_err());
/// assert!(ArchivePath::validate("out.tar", PathRole::Output, Some(ZIP_SUFFIX)).is_err());
/// # Ok::<(), zippy_core::ZippyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePath {
    raw: String,
    suffix: Option<&'static str>,
}

impl ArchivePath {
    /// Validates `candidate` for the given role and optional suffix.
    pub fn validate(
        candidate: &str,
        role: PathRole,
        suffix: Option<&'static str>,
    ) -> Result<Self> {
        let reject = |problem| ZippyError::InvalidPath {
            role,
            path: candidate.to_string(),
            problem,
        };

        if candidate.is_empty() {
            return Err(reject(PathProblem::Empty));
        }

        if candidate.starts_with(['/', '\\']) || Path::new(candidate).is_absolute() {
            return Err(reject(PathProblem::Absolute));
        }

        if let Some(suffix) = suffix {
            let Some(stem) = candidate.strip_suffix(suffix) else {
                return Err(reject(PathProblem::MissingSuffix { suffix }));
            };
            let name = stem.rsplit(['/', '\\']).next().unwrap_or(stem);
            if matches!(name, "" | "." | "..") {
                return Err(reject(PathProblem::EmptyStem { suffix }));
            }
        }

        Ok(Self {
            raw: candidate.to_string(),
            suffix,
        })
    }

    /// Returns the path as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the path as a `Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.raw)
    }

    /// Returns the path with the required suffix removed.
    ///
    /// Paths validated without a suffix are returned unchanged.
    #[must_use]
    pub fn stem(&self) -> &str {
        self.suffix
            .and_then(|suffix| self.raw.strip_suffix(suffix))
            .unwrap_or(&self.raw)
    }
}

impl std::fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn problem_of(candidate: &str, suffix: Option<&'static str>) -> PathProblem {
        match ArchivePath::validate(candidate, PathRole::Input, suffix) {
            Err(ZippyError::InvalidPath { problem, .. }) => problem,
            other => panic!("expected InvalidPath for {candidate:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_relative_paths() {
        assert!(ArchivePath::validate("data", PathRole::Input, None).is_ok());
        assert!(ArchivePath::validate("a/b/c", PathRole::Input, None).is_ok());
        assert!(ArchivePath::validate("../sibling", PathRole::Input, None).is_ok());
        assert!(ArchivePath::validate("out.zip", PathRole::Output, Some(ZIP_SUFFIX)).is_ok());
    }

    #[test]
    fn test_rejects_leading_separators() {
        assert_eq!(problem_of("/data", None), PathProblem::Absolute);
        assert_eq!(problem_of("\\data", None), PathProblem::Absolute);
        assert_eq!(problem_of("/out.zip", Some(ZIP_SUFFIX)), PathProblem::Absolute);
        assert_eq!(problem_of("\\out.zip", Some(ZIP_SUFFIX)), PathProblem::Absolute);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(problem_of("", None), PathProblem::Empty);
        assert_eq!(problem_of("", Some(ZIP_SUFFIX)), PathProblem::Empty);
    }

    #[test]
    fn test_requires_exact_suffix() {
        assert_eq!(
            problem_of("out.tar", Some(ZIP_SUFFIX)),
            PathProblem::MissingSuffix { suffix: ZIP_SUFFIX }
        );
        assert_eq!(
            problem_of("out.ZIP", Some(ZIP_SUFFIX)),
            PathProblem::MissingSuffix { suffix: ZIP_SUFFIX }
        );
        assert_eq!(
            problem_of("out.zip/", Some(ZIP_SUFFIX)),
            PathProblem::MissingSuffix { suffix: ZIP_SUFFIX }
        );
    }

    #[test]
    fn test_rejects_bare_suffix() {
        assert_eq!(
            problem_of(".zip", Some(ZIP_SUFFIX)),
            PathProblem::EmptyStem { suffix: ZIP_SUFFIX }
        );
        assert_eq!(
            problem_of("dir/.zip", Some(ZIP_SUFFIX)),
            PathProblem::EmptyStem { suffix: ZIP_SUFFIX }
        );
    }

    #[test]
    fn test_rejects_dot_stems() {
        for candidate in ["..zip", "...zip", "a/..zip", "a/...zip", "a\\..zip"] {
            assert_eq!(
                problem_of(candidate, Some(ZIP_SUFFIX)),
                PathProblem::EmptyStem { suffix: ZIP_SUFFIX },
                "{candidate}"
            );
        }
        assert!(ArchivePath::validate("a/.hidden.zip", PathRole::Input, Some(ZIP_SUFFIX)).is_ok());
        assert!(ArchivePath::validate("...x.zip", PathRole::Input, Some(ZIP_SUFFIX)).is_ok());
    }

    #[test]
    fn test_suffix_not_required_without_request() {
        let path = ArchivePath::validate("notes.zip", PathRole::Input, None).unwrap();
        assert_eq!(path.stem(), "notes.zip");
    }

    #[test]
    fn test_stem_strips_suffix() {
        let path = ArchivePath::validate("nested/out.zip", PathRole::Output, Some(ZIP_SUFFIX))
            .unwrap();
        assert_eq!(path.stem(), "nested/out");
        assert_eq!(path.as_str(), "nested/out.zip");
        assert_eq!(path.to_string(), "nested/out.zip");
    }

    #[test]
    fn test_role_is_reported() {
        let err = ArchivePath::validate("/x.zip", PathRole::Output, Some(ZIP_SUFFIX)).unwrap_err();
        assert!(matches!(
            err,
            ZippyError::InvalidPath {
                role: PathRole::Output,
                ..
            }
        ));
    }
}
