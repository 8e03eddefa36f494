//! Error rendering utilities for CLI.
//!
//! Commands propagate zippy-core's typed errors (thiserror) through anyhow;
//! the formatters turn them into user-facing text with actionable guidance.

use zippy_core::ZippyError;
use zippy_core::error::PathProblem;

/// Code reported for failures that did not come from zippy-core.
pub const CLI_ERROR_CODE: &str = "CLI";

/// Describes a `ZippyError` for the user, with a `HINT:` line where one helps
pub fn describe_zippy_error(err: &ZippyError) -> String {
    match err {
        ZippyError::InvalidPath {
            role,
            path,
            problem,
        } => {
            let hint = match problem {
                PathProblem::Empty => "Pass a path relative to the current directory.",
                PathProblem::Absolute => {
                    "Paths are resolved against the current directory. Remove the leading separator."
                }
                PathProblem::MissingSuffix { .. } | PathProblem::EmptyStem { .. } => {
                    "Archive names look like 'name.zip'."
                }
            };
            format!("Invalid {role} path '{path}': {problem}\nHINT: {hint}")
        }
        ZippyError::InvalidConfiguration { reason } => {
            format!("Invalid configuration: {reason}\nHINT: Compression levels range from 0 (store) to 9.")
        }
        ZippyError::SourceNotFound { path } => format!(
            "The data folder '{}' does not exist\n\
             HINT: Source paths are relative to the directory zippy runs in.",
            path.display()
        ),
        ZippyError::ArchiveNotFound { path } => format!(
            "The zip file '{}' does not exist\n\
             HINT: Archive paths are relative to the directory zippy runs in.",
            path.display()
        ),
        ZippyError::Open { path, reason } => format!(
            "Failed to open zip file '{}': {reason}\n\
             HINT: The file may be corrupted or not a zip archive.",
            path.display()
        ),
        ZippyError::Entry { entry, reason } => format!(
            "Failed to process entry '{entry}': {reason}\n\
             HINT: No partial archive was kept when packing; unpacked files written so far remain."
        ),
        ZippyError::Commit { path, reason } => format!(
            "Failed to save zip file '{}': {reason}\n\
             HINT: Check free disk space and write permissions.",
            path.display()
        ),
        ZippyError::Io { .. } => err.to_string(),
    }
}

/// Describes any command error, using [`describe_zippy_error`] when the
/// error came from zippy-core
pub fn describe(error: &anyhow::Error) -> String {
    error
        .downcast_ref::<ZippyError>()
        .map_or_else(|| format!("{error:#}"), describe_zippy_error)
}

/// Stable upper-case code for machine-readable output
pub fn error_code(error: &anyhow::Error) -> &'static str {
    error
        .downcast_ref::<ZippyError>()
        .map_or(CLI_ERROR_CODE, ZippyError::code)
}
