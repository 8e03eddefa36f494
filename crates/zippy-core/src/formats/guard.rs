//! Scoped ownership of an archive being written.

use std::path::Path;

use super::traits::ArchiveSink;
use super::traits::BackendError;
use super::traits::BackendResult;

/// Owns an [`ArchiveSink`] and discards it on drop unless committed.
///
/// Every early return between opening and committing an archive therefore
/// leaves no partial output behind.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zippy_core::PackConfig;
/// use zippy_core::formats::ArchiveGuard;
/// use zippy_core::formats::ZipSink;
///
/// let sink = ZipSink::create(Path::new("out.zip"), &PackConfig::default())?;
/// let mut guard = ArchiveGuard::new(sink);
/// guard.add_directory("docs/")?;
/// guard.commit()?;
/// # Ok::<(), zippy_core::formats::BackendError>(())
/// ```
#[derive(Debug)]
pub struct ArchiveGuard<S: ArchiveSink> {
    sink: Option<S>,
}

impl<S: ArchiveSink> ArchiveGuard<S> {
    /// Takes ownership of an open sink.
    pub fn new(sink: S) -> Self {
        Self { sink: Some(sink) }
    }

    fn sink_mut(&mut self) -> BackendResult<&mut S> {
        self.sink
            .as_mut()
            .ok_or_else(|| BackendError::new("archive handle already released"))
    }

    /// Forwards to [`ArchiveSink::add_file`].
    pub fn add_file(&mut self, name: &str, source: &Path) -> BackendResult<u64> {
        self.sink_mut()?.add_file(name, source)
    }

    /// Forwards to [`ArchiveSink::add_directory`].
    pub fn add_directory(&mut self, name: &str) -> BackendResult<()> {
        self.sink_mut()?.add_directory(name)
    }

    /// Commits the archive, releasing the handle.
    pub fn commit(mut self) -> BackendResult<u64> {
        match self.sink.take() {
            Some(sink) => sink.commit(),
            None => Err(BackendError::new("archive handle already released")),
        }
    }

    /// Discards the archive, releasing the handle.
    ///
    /// Unlike dropping the guard, this reports a failed cleanup.
    pub fn discard(mut self) -> BackendResult<()> {
        self.sink.take().map_or(Ok(()), S::discard)
    }
}

impl<S: ArchiveSink> Drop for ArchiveGuard<S> {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            // Errors surface only through an explicit `discard`.
            let _ = sink.discard();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Calls {
        names: Vec<String>,
        committed: usize,
        discarded: usize,
    }

    #[derive(Debug)]
    struct RecordingSink(Rc<RefCell<Calls>>);

    impl ArchiveSink for RecordingSink {
        fn add_file(&mut self, name: &str, _source: &Path) -> BackendResult<u64> {
            self.0.borrow_mut().names.push(name.to_string());
            Ok(0)
        }

        fn add_directory(&mut self, name: &str) -> BackendResult<()> {
            self.0.borrow_mut().names.push(name.to_string());
            Ok(())
        }

        fn commit(self) -> BackendResult<u64> {
            self.0.borrow_mut().committed += 1;
            Ok(42)
        }

        fn discard(self) -> BackendResult<()> {
            self.0.borrow_mut().discarded += 1;
            Ok(())
        }
    }

    fn guard() -> (ArchiveGuard<RecordingSink>, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        (ArchiveGuard::new(RecordingSink(Rc::clone(&calls))), calls)
    }

    #[test]
    fn test_commit_releases_once() {
        let (mut guard, calls) = guard();
        guard.add_directory("d/").unwrap();
        guard.add_file("d/f", Path::new("f")).unwrap();
        assert_eq!(guard.commit().unwrap(), 42);

        let calls = calls.borrow();
        assert_eq!(calls.names, vec!["d/", "d/f"]);
        assert_eq!(calls.committed, 1);
        assert_eq!(calls.discarded, 0);
    }

    #[test]
    fn test_drop_discards() {
        let (guard, calls) = guard();
        drop(guard);
        assert_eq!(calls.borrow().discarded, 1);
        assert_eq!(calls.borrow().committed, 0);
    }

    #[test]
    fn test_early_return_discards() {
        fn fails(guard: &mut ArchiveGuard<RecordingSink>) -> BackendResult<()> {
            guard.add_directory("x/")?;
            Err(BackendError::new("walk failed"))
        }

        let (mut guard, calls) = guard();
        let result = fails(&mut guard);
        assert!(result.is_err());
        drop(guard);
        assert_eq!(calls.borrow().discarded, 1);
    }

    #[test]
    fn test_explicit_discard() {
        let (guard, calls) = guard();
        guard.discard().unwrap();
        assert_eq!(calls.borrow().discarded, 1);
    }
}
