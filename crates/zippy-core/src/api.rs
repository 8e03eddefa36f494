//! High-level entry points for packing and unpacking.
//!
//! Every function validates its path arguments before touching the
//! filesystem. Relative paths resolve against the process working directory
//! ([`pack`], [`unpack`]) or an explicit base directory ([`pack_in`],
//! [`unpack_in`]).

use std::env;
use std::path::Path;
use std::path::PathBuf;

use crate::PackConfig;
use crate::PackReport;
use crate::Result;
use crate::UnpackReport;
use crate::ZippyError;
use crate::creation::pack_directory;
use crate::extraction::unpack_archive;
use crate::log::Logger;
use crate::types::ArchivePath;
use crate::types::PathRole;
use crate::types::ZIP_SUFFIX;

/// Packs the directory `source` into the zip archive `output`.
///
/// Both paths are relative to the current working directory. `output` must
/// end in `.zip`; an existing file there is replaced.
///
/// # Errors
///
/// Returns an error if:
/// - either path fails validation (nothing is touched on disk)
/// - `source` is not an existing directory
/// - the archive cannot be created, filled or saved
///
/// # Examples
///
/// ```no_run
/// use zippy_core::log::NoopLogger;
/// use zippy_core::pack;
///
/// let report = pack("proj", "proj.zip", &NoopLogger)?;
/// println!("{} entries", report.total_entries());
/// # Ok::<(), zippy_core::ZippyError>(())
/// ```
pub fn pack(source: &str, output: &str, logger: &dyn Logger) -> Result<PackReport> {
    pack_in(&current_dir()?, source, output, &PackConfig::default(), logger)
}

/// Packs `source` into `output`, both resolved against `base`.
///
/// # Errors
///
/// See [`pack`]. Also fails if `config` is out of range.
pub fn pack_in(
    base: &Path,
    source: &str,
    output: &str,
    config: &PackConfig,
    logger: &dyn Logger,
) -> Result<PackReport> {
    config.validate()?;
    let source = ArchivePath::validate(source, PathRole::Input, None)?;
    let output = ArchivePath::validate(output, PathRole::Output, Some(ZIP_SUFFIX))?;

    pack_directory(base, &source, &output, config, logger)
}

/// Unpacks the zip archive `archive` into a directory beside it.
///
/// `proj.zip` unpacks into `proj/`. An existing `proj` is deleted first.
///
/// # Errors
///
/// Returns an error if:
/// - the path fails validation (nothing is touched on disk)
/// - the archive does not exist or cannot be read as a zip
/// - an entry cannot be read, is unsafe, or cannot be written
///
/// # Examples
///
/// ```no_run
/// use zippy_core::log::NoopLogger;
/// use zippy_core::unpack;
///
/// let report = unpack("proj.zip", &NoopLogger)?;
/// println!("unpacked into {}", report.destination.display());
/// # Ok::<(), zippy_core::ZippyError>(())
/// ```
pub fn unpack(archive: &str, logger: &dyn Logger) -> Result<UnpackReport> {
    unpack_in(&current_dir()?, archive, logger)
}

/// Unpacks `archive`, resolved against `base`.
///
/// # Errors
///
/// See [`unpack`].
pub fn unpack_in(base: &Path, archive: &str, logger: &dyn Logger) -> Result<UnpackReport> {
    let archive = ArchivePath::validate(archive, PathRole::Input, Some(ZIP_SUFFIX))?;
    unpack_archive(base, &archive, logger)
}

/// Runs [`pack`] and reports any error through `logger`.
///
/// Returns `true` on success.
pub fn pack_or_log(source: &str, output: &str, logger: &dyn Logger) -> bool {
    report_outcome(pack(source, output, logger), logger)
}

/// Runs [`unpack`] and reports any error through `logger`.
///
/// Returns `true` on success.
pub fn unpack_or_log(archive: &str, logger: &dyn Logger) -> bool {
    report_outcome(unpack(archive, logger), logger)
}

fn report_outcome<T>(outcome: Result<T>, logger: &dyn Logger) -> bool {
    match outcome {
        Ok(_) => true,
        Err(err) => {
            logger.error(&err.to_string());
            false
        }
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| ZippyError::io(".", e))
}
