//! Helpers for building archives in unit tests.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Writes a zip archive to `path`.
///
/// Each entry is a name and optional content: `None` adds a directory
/// marker, `Some` adds an uncompressed file.
pub fn write_test_zip(path: &Path, entries: &[(&str, Option<&[u8]>)]) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, content) in entries {
        match content {
            Some(data) => {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
            None => writer.add_directory(*name, options).unwrap(),
        }
    }

    writer.finish().unwrap();
}
