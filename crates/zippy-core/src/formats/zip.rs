//! Zip backend for the archive capability traits.

use std::fs;
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use zip::CompressionMethod;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::traits::ArchiveSink;
use super::traits::ArchiveSource;
use super::traits::BackendError;
use super::traits::BackendResult;
use crate::PackConfig;

/// Zip archive open for writing at a fixed path.
pub struct ZipSink {
    writer: ZipWriter<File>,
    path: PathBuf,
    options: SimpleFileOptions,
}

impl ZipSink {
    /// Creates an empty archive at `path`, truncating any existing file.
    pub fn create(path: &Path, config: &PackConfig) -> BackendResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: ZipWriter::new(file),
            path: path.to_path_buf(),
            options: file_options(config),
        })
    }

    /// Path the archive is being written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for ZipSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipSink").field("path", &self.path).finish()
    }
}

/// Level 0 stores entries uncompressed, anything else deflates.
fn file_options(config: &PackConfig) -> SimpleFileOptions {
    match config.compression_level {
        Some(0) => SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
        level => {
            let level = level.unwrap_or(PackConfig::DEFAULT_COMPRESSION_LEVEL);
            SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .compression_level(Some(i64::from(level)))
        }
    }
}

fn remove_partial(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl ArchiveSink for ZipSink {
    fn add_file(&mut self, name: &str, source: &Path) -> BackendResult<u64> {
        let mut file = File::open(source)?;
        self.writer.start_file(name, self.options)?;
        let written = io::copy(&mut file, &mut self.writer)?;
        Ok(written)
    }

    fn add_directory(&mut self, name: &str) -> BackendResult<()> {
        self.writer.add_directory(name, self.options)?;
        Ok(())
    }

    fn commit(self) -> BackendResult<u64> {
        let Self { writer, path, .. } = self;

        let finished = writer
            .finish()
            .map_err(BackendError::from)
            .and_then(|file| {
                file.sync_all()?;
                Ok(file.metadata()?.len())
            });

        finished.or_else(|err| match remove_partial(&path) {
            Ok(()) => Err(err),
            Err(e) => Err(BackendError::new(format!(
                "{err}; partial archive could not be removed: {e}"
            ))),
        })
    }

    fn discard(self) -> BackendResult<()> {
        let Self { writer, path, .. } = self;
        drop(writer);
        remove_partial(&path).map_err(|e| {
            BackendError::new(format!("partial archive could not be removed: {e}"))
        })
    }
}

/// Zip archive open for reading.
pub struct ZipSource {
    archive: ZipArchive<File>,
}

impl ZipSource {
    /// Opens the archive at `path` and reads its entry table.
    pub fn open(path: &Path) -> BackendResult<Self> {
        let file = File::open(path)?;
        let archive = ZipArchive::new(file)?;
        Ok(Self { archive })
    }
}

impl std::fmt::Debug for ZipSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipSource")
            .field("entries", &self.archive.len())
            .finish()
    }
}

impl ArchiveSource for ZipSource {
    fn len(&self) -> usize {
        self.archive.len()
    }

    fn entry_name(&mut self, index: usize) -> BackendResult<String> {
        let entry = self.archive.by_index_raw(index)?;
        Ok(entry.name().to_string())
    }

    fn entry_size(&mut self, index: usize) -> BackendResult<u64> {
        let entry = self.archive.by_index_raw(index)?;
        Ok(entry.size())
    }

    fn read_entry(&mut self, index: usize, buf: &mut [u8]) -> BackendResult<()> {
        let mut entry = self.archive.by_index(index)?;

        entry.read_exact(buf).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                BackendError::new(format!(
                    "short read: entry holds fewer than {} bytes",
                    buf.len()
                ))
            } else {
                e.into()
            }
        })?;

        // Reading to end of stream also runs the CRC check.
        let mut probe = [0u8; 1];
        if entry.read(&mut probe)? != 0 {
            return Err(BackendError::new(format!(
                "entry holds more than its recorded {} bytes",
                buf.len()
            )));
        }

        Ok(())
    }
}
