//! Unpack pipeline: zip archive to a fresh directory.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use crate::Result;
use crate::ZippyError;
use crate::extraction::report::UnpackReport;
use crate::formats::ArchiveSource;
use crate::formats::ZipSource;
use crate::log::Logger;
use crate::types::ArchivePath;
use crate::types::EntryKind;
use crate::types::EntryRecord;
use crate::types::TargetRoot;

/// Unpacks `archive`, relative to `base`, into the sibling directory named
/// after the archive without its `.zip` suffix.
///
/// Anything already at the destination is deleted first, so the result
/// mirrors the archive exactly. The archive is opened before the destination
/// is touched: a missing or unreadable archive leaves the filesystem as is.
///
/// Extraction stops at the first failing entry. Entries written before the
/// failure stay on disk.
pub fn unpack_archive(
    base: &Path,
    archive: &ArchivePath,
    logger: &dyn Logger,
) -> Result<UnpackReport> {
    let start = Instant::now();
    let archive_file = base.join(archive.as_path());

    if !archive_file.is_file() {
        return Err(ZippyError::ArchiveNotFound { path: archive_file });
    }

    let mut source = ZipSource::open(&archive_file).map_err(|e| ZippyError::Open {
        path: archive_file.clone(),
        reason: e.to_string(),
    })?;

    let destination = TargetRoot::unpack_destination(base, archive);
    prepare_destination(&destination, logger)?;

    let mut report = extract_entries(&mut source, &destination)?;
    report.duration = start.elapsed();

    logger.success(&format!(
        "Unpacked {} files and {} directories into \"{}\"",
        report.files_extracted,
        report.directories_created,
        destination.as_path().display()
    ));

    Ok(report)
}

/// Removes whatever occupies the destination and creates it empty.
fn prepare_destination(destination: &TargetRoot, logger: &dyn Logger) -> Result<()> {
    let path = destination.as_path();

    match fs::symlink_metadata(path) {
        Ok(meta) => {
            let removed = if meta.is_dir() {
                fs::remove_dir_all(path)
            } else {
                fs::remove_file(path)
            };
            removed.map_err(|e| ZippyError::io(path, e))?;
            logger.info(&format!(
                "Old zip output folder: \"{}\" was removed",
                path.display()
            ));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(ZippyError::io(path, e)),
    }

    fs::create_dir_all(path).map_err(|e| ZippyError::io(path, e))
}

/// Writes every entry of `source` below `destination`, in archive order.
///
/// Entry names that would resolve outside `destination` are rejected.
pub fn extract_entries<S: ArchiveSource>(
    source: &mut S,
    destination: &TargetRoot,
) -> Result<UnpackReport> {
    let mut report = UnpackReport::new();
    report.destination = destination.as_path().to_path_buf();

    for index in 0..source.len() {
        let name = source.entry_name(index).map_err(|e| {
            ZippyError::entry(format!("#{index}"), format!("failed to get entry name: {e}"))
        })?;

        let record = EntryRecord::from_archive_name(&name);
        if !record.is_contained() {
            return Err(ZippyError::entry(
                name,
                "unsafe entry name: path escapes the destination directory",
            ));
        }

        let target = destination.join(&record);
        match record.kind() {
            EntryKind::Directory => {
                fs::create_dir_all(&target).map_err(|e| ZippyError::io(&target, e))?;
                report.directories_created += 1;
            }
            EntryKind::File => {
                report.bytes_written += extract_file(source, index, &record, &target)?;
                report.files_extracted += 1;
            }
        }
    }

    Ok(report)
}

fn extract_file<S: ArchiveSource>(
    source: &mut S,
    index: usize,
    record: &EntryRecord,
    target: &Path,
) -> Result<u64> {
    let size = source.entry_size(index).map_err(|e| {
        ZippyError::entry(record.path(), format!("failed to determine file size: {e}"))
    })?;
    let too_large =
        || ZippyError::entry(record.path(), format!("file size {size} does not fit in memory"));
    let len = usize::try_from(size).map_err(|_| too_large())?;

    // Sizes come from the archive and may be forged.
    let mut contents = Vec::new();
    contents.try_reserve_exact(len).map_err(|_| too_large())?;
    contents.resize(len, 0u8);
    source
        .read_entry(index, &mut contents)
        .map_err(|e| ZippyError::entry(record.path(), format!("failed to read data: {e}")))?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| ZippyError::io(parent, e))?;
    }
    fs::write(target, &contents).map_err(|e| ZippyError::io(target, e))?;

    Ok(size)
}
