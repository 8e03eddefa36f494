//! Pack pipeline: directory tree to zip archive.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::PackConfig;
use crate::Result;
use crate::ZippyError;
use crate::creation::report::PackReport;
use crate::creation::walker::SourceWalker;
use crate::creation::walker::WalkOutcome;
use crate::creation::walker::WalkedEntry;
use crate::formats::ArchiveGuard;
use crate::formats::ArchiveSink;
use crate::formats::ZipSink;
use crate::log::Logger;
use crate::types::ArchivePath;
use crate::types::EntryKind;
use crate::types::TargetRoot;

/// Packs `source` into the archive `output`, both relative to `base`.
///
/// Paths must already be validated. A pre-existing archive at the output path
/// is deleted first so old content is never merged with new. On any failure
/// after the archive is opened, the partial archive is removed.
///
/// # Errors
///
/// - [`ZippyError::SourceNotFound`] if `source` is not a directory
/// - [`ZippyError::Open`] if the archive cannot be created
/// - [`ZippyError::Entry`] if an entry cannot be added
/// - [`ZippyError::Commit`] if the archive cannot be finalized
/// - [`ZippyError::Io`] if the walk or removal of the old archive fails
pub fn pack_directory(
    base: &Path,
    source: &ArchivePath,
    output: &ArchivePath,
    config: &PackConfig,
    logger: &dyn Logger,
) -> Result<PackReport> {
    let start = Instant::now();
    let source_root = TargetRoot::resolve(base, source);
    let archive = base.join(output.as_path());

    if !source_root.as_path().is_dir() {
        return Err(ZippyError::SourceNotFound {
            path: source_root.as_path().to_path_buf(),
        });
    }

    if fs::symlink_metadata(&archive).is_ok() {
        logger.info(&format!(
            "Removing existing zip file: \"{}\"",
            archive.display()
        ));
        fs::remove_file(&archive).map_err(|e| ZippyError::io(&archive, e))?;
    }

    let sink = ZipSink::create(&archive, config).map_err(|e| ZippyError::Open {
        path: archive.clone(),
        reason: e.to_string(),
    })?;

    let walker = SourceWalker::new(source_root.as_path(), config).excluding(&archive);
    let mut report = write_entries(ArchiveGuard::new(sink), &walker, &archive, logger)?;

    report.archive = archive;
    report.duration = start.elapsed();

    logger.success(&format!(
        "Packed {} files and {} directories into \"{}\"",
        report.files_added,
        report.directories_added,
        output
    ));

    Ok(report)
}

/// Adds every walked entry to the guarded sink and commits it.
///
/// On any failure the sink is discarded. A partial archive that cannot be
/// removed is reported as a warning.
pub fn write_entries<S: ArchiveSink>(
    mut guard: ArchiveGuard<S>,
    walker: &SourceWalker<'_>,
    archive: &Path,
    logger: &dyn Logger,
) -> Result<PackReport> {
    let mut report = PackReport::new();

    if let Err(err) = stage_entries(&mut guard, walker, &mut report, logger) {
        if let Err(e) = guard.discard() {
            logger.warning(&format!("\"{}\": {e}", archive.display()));
        }
        return Err(err);
    }

    report.bytes_compressed = guard.commit().map_err(|e| ZippyError::Commit {
        path: archive.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(report)
}

fn stage_entries<S: ArchiveSink>(
    guard: &mut ArchiveGuard<S>,
    walker: &SourceWalker<'_>,
    report: &mut PackReport,
    logger: &dyn Logger,
) -> Result<()> {
    for outcome in walker.walk() {
        match outcome? {
            WalkOutcome::Entry(entry) => add_entry(guard, &entry, report)?,
            WalkOutcome::Skipped { path, reason } => {
                let message = format!("Skipped \"{}\": {reason}", path.display());
                logger.warning(&message);
                report.entries_skipped += 1;
                report.add_warning(message);
            }
        }
    }
    Ok(())
}

fn add_entry<S: ArchiveSink>(
    guard: &mut ArchiveGuard<S>,
    entry: &WalkedEntry,
    report: &mut PackReport,
) -> Result<()> {
    let name = entry.record.archive_name();

    match entry.record.kind() {
        EntryKind::File => {
            let bytes = guard.add_file(&name, &entry.path).map_err(|e| {
                ZippyError::entry(entry.record.path(), format!("failed to add file: {e}"))
            })?;
            report.files_added += 1;
            report.bytes_written += bytes;
        }
        EntryKind::Directory => {
            guard.add_directory(&name).map_err(|e| {
                ZippyError::entry(entry.record.path(), format!("failed to add directory: {e}"))
            })?;
            report.directories_added += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::formats::BackendError;
    use crate::formats::BackendResult;
    use crate::log::MemoryLogger;
    use crate::log::Severity;
    use crate::types::PathRole;
    use crate::types::ZIP_SUFFIX;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[derive(Debug, Default)]
    struct State {
        added: Vec<String>,
        committed: bool,
        discarded: bool,
    }

    /// Sink that fails when asked to add `fail_on`, or on commit.
    #[derive(Debug)]
    struct FakeSink {
        state: Rc<RefCell<State>>,
        fail_on: Option<&'static str>,
        fail_commit: bool,
        fail_discard: bool,
    }

    impl FakeSink {
        fn check(&self, name: &str) -> BackendResult<()> {
            if self.fail_on == Some(name) {
                return Err(BackendError::new("simulated library failure"));
            }
            self.state.borrow_mut().added.push(name.to_string());
            Ok(())
        }
    }

    impl ArchiveSink for FakeSink {
        fn add_file(&mut self, name: &str, _source: &Path) -> BackendResult<u64> {
            self.check(name)?;
            Ok(1)
        }

        fn add_directory(&mut self, name: &str) -> BackendResult<()> {
            self.check(name)
        }

        fn commit(self) -> BackendResult<u64> {
            if self.fail_commit {
                self.state.borrow_mut().discarded = true;
                return Err(BackendError::new("simulated commit failure"));
            }
            self.state.borrow_mut().committed = true;
            Ok(0)
        }

        fn discard(self) -> BackendResult<()> {
            self.state.borrow_mut().discarded = true;
            if self.fail_discard {
                return Err(BackendError::new("partial archive could not be removed"));
            }
            Ok(())
        }
    }

    fn fake(fail_on: Option<&'static str>, fail_commit: bool) -> (FakeSink, Rc<RefCell<State>>) {
        let state = Rc::new(RefCell::new(State::default()));
        let sink = FakeSink {
            state: Rc::clone(&state),
            fail_on,
            fail_commit,
            fail_discard: false,
        };
        (sink, state)
    }

    fn sample_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "hi").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/b.txt"), "yo").unwrap();
        temp
    }

    #[test]
    fn test_write_entries_commits() {
        let tree = sample_tree();
        let config = PackConfig::default().with_sort_entries(true);
        let walker = SourceWalker::new(tree.path(), &config);
        let (sink, state) = fake(None, false);
        let logger = MemoryLogger::new();

        let report = write_entries(
            ArchiveGuard::new(sink),
            &walker,
            Path::new("out.zip"),
            &logger,
        )
        .unwrap();

        assert_eq!(report.files_added, 2);
        assert_eq!(report.directories_added, 1);
        let state = state.borrow();
        assert!(state.committed);
        assert!(!state.discarded);
        assert_eq!(state.added, vec!["a.txt", "sub/", "sub/b.txt"]);
    }

    #[test]
    fn test_entry_failure_discards() {
        let tree = sample_tree();
        let config = PackConfig::default();
        let walker = SourceWalker::new(tree.path(), &config);
        let (sink, state) = fake(Some("sub/b.txt"), false);

        let err = write_entries(
            ArchiveGuard::new(sink),
            &walker,
            Path::new("out.zip"),
            &MemoryLogger::new(),
        )
        .unwrap_err();

        match err {
            ZippyError::Entry { entry, reason } => {
                assert_eq!(entry, "sub/b.txt");
                assert!(reason.contains("simulated library failure"));
            }
            other => panic!("expected entry error, got {other:?}"),
        }
        let state = state.borrow();
        assert!(state.discarded);
        assert!(!state.committed);
    }

    #[test]
    fn test_directory_failure_discards() {
        let tree = sample_tree();
        let config = PackConfig::default();
        let walker = SourceWalker::new(tree.path(), &config);
        let (sink, state) = fake(Some("sub/"), false);

        let err = write_entries(
            ArchiveGuard::new(sink),
            &walker,
            Path::new("out.zip"),
            &MemoryLogger::new(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("failed to add directory"));
        assert!(state.borrow().discarded);
    }

    #[test]
    fn test_failed_cleanup_logged_as_warning() {
        let tree = sample_tree();
        let config = PackConfig::default();
        let walker = SourceWalker::new(tree.path(), &config);
        let (mut sink, state) = fake(Some("a.txt"), false);
        sink.fail_discard = true;
        let logger = MemoryLogger::new();

        let err = write_entries(
            ArchiveGuard::new(sink),
            &walker,
            Path::new("out.zip"),
            &logger,
        )
        .unwrap_err();

        assert!(matches!(err, ZippyError::Entry { .. }));
        assert!(state.borrow().discarded);
        assert!(logger.contains(Severity::Warning, "could not be removed"));
        assert!(logger.contains(Severity::Warning, "out.zip"));
    }

    #[test]
    fn test_commit_failure_reported() {
        let tree = sample_tree();
        let config = PackConfig::default();
        let walker = SourceWalker::new(tree.path(), &config);
        let (sink, state) = fake(None, true);

        let err = write_entries(
            ArchiveGuard::new(sink),
            &walker,
            Path::new("out.zip"),
            &MemoryLogger::new(),
        )
        .unwrap_err();

        assert!(matches!(err, ZippyError::Commit { .. }));
        assert!(err.to_string().contains("out.zip"));
        assert!(state.borrow().discarded);
    }

    #[cfg(unix)]
    #[test]
    fn test_skipped_entries_logged_as_warnings() {
        use std::os::unix::fs::symlink;

        let tree = sample_tree();
        symlink(tree.path().join("nowhere"), tree.path().join("broken")).unwrap();

        let config = PackConfig::default();
        let walker = SourceWalker::new(tree.path(), &config);
        let (sink, _state) = fake(None, false);
        let logger = MemoryLogger::new();

        let report = write_entries(
            ArchiveGuard::new(sink),
            &walker,
            Path::new("out.zip"),
            &logger,
        )
        .unwrap();

        assert_eq!(report.entries_skipped, 1);
        assert!(report.has_warnings());
        assert!(logger.contains(Severity::Warning, "broken"));
    }

    #[test]
    fn test_pack_directory_writes_archive() {
        let base = TempDir::new().unwrap();
        fs::create_dir(base.path().join("proj")).unwrap();
        fs::write(base.path().join("proj/a.txt"), "hi").unwrap();
        fs::create_dir(base.path().join("proj/sub")).unwrap();

        let source = ArchivePath::validate("proj", PathRole::Input, None).unwrap();
        let output = ArchivePath::validate("out.zip", PathRole::Output, Some(ZIP_SUFFIX)).unwrap();
        let logger = MemoryLogger::new();

        let report =
            pack_directory(base.path(), &source, &output, &PackConfig::default(), &logger)
                .unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(report.directories_added, 1);
        assert_eq!(report.bytes_written, 2);
        assert_eq!(report.archive, base.path().join("out.zip"));
        assert_eq!(
            report.bytes_compressed,
            fs::metadata(base.path().join("out.zip")).unwrap().len()
        );
        assert!(logger.contains(Severity::Success, "out.zip"));
    }

    #[test]
    fn test_pack_directory_missing_source() {
        let base = TempDir::new().unwrap();
        let source = ArchivePath::validate("missing", PathRole::Input, None).unwrap();
        let output = ArchivePath::validate("out.zip", PathRole::Output, Some(ZIP_SUFFIX)).unwrap();

        let err = pack_directory(
            base.path(),
            &source,
            &output,
            &PackConfig::default(),
            &MemoryLogger::new(),
        )
        .unwrap_err();

        assert!(matches!(err, ZippyError::SourceNotFound { .. }));
        assert!(!base.path().join("out.zip").exists());
    }

    #[test]
    fn test_pack_directory_source_is_file() {
        let base = TempDir::new().unwrap();
        fs::write(base.path().join("file"), "x").unwrap();
        let source = ArchivePath::validate("file", PathRole::Input, None).unwrap();
        let output = ArchivePath::validate("out.zip", PathRole::Output, Some(ZIP_SUFFIX)).unwrap();

        let err = pack_directory(
            base.path(),
            &source,
            &output,
            &PackConfig::default(),
            &MemoryLogger::new(),
        )
        .unwrap_err();

        assert!(matches!(err, ZippyError::SourceNotFound { .. }));
    }

    #[test]
    fn test_pack_directory_logs_removal_of_old_archive() {
        let base = TempDir::new().unwrap();
        fs::create_dir(base.path().join("proj")).unwrap();
        fs::write(base.path().join("out.zip"), "stale").unwrap();

        let source = ArchivePath::validate("proj", PathRole::Input, None).unwrap();
        let output = ArchivePath::validate("out.zip", PathRole::Output, Some(ZIP_SUFFIX)).unwrap();
        let logger = MemoryLogger::new();

        pack_directory(base.path(), &source, &output, &PackConfig::default(), &logger).unwrap();

        assert!(logger.contains(Severity::Info, "Removing existing zip file"));
        let data = fs::read(base.path().join("out.zip")).unwrap();
        assert_eq!(&data[0..2], b"PK");
    }

    #[test]
    fn test_pack_directory_into_itself() {
        let base = TempDir::new().unwrap();
        fs::create_dir(base.path().join("proj")).unwrap();
        fs::write(base.path().join("proj/a.txt"), "a").unwrap();

        let source = ArchivePath::validate("proj", PathRole::Input, None).unwrap();
        let output =
            ArchivePath::validate("proj/self.zip", PathRole::Output, Some(ZIP_SUFFIX)).unwrap();

        let report = pack_directory(
            base.path(),
            &source,
            &output,
            &PackConfig::default(),
            &MemoryLogger::new(),
        )
        .unwrap();

        assert_eq!(report.files_added, 1);
    }
}
