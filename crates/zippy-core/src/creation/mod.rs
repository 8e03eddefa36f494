//! Packing a directory tree into a zip archive.
//!
//! [`walker`] enumerates the source tree, [`packer`] streams the entries into
//! an [`ArchiveSink`](crate::formats::ArchiveSink) and commits it.

pub mod config;
pub mod packer;
pub mod report;
pub mod walker;

pub use config::PackConfig;
pub use packer::pack_directory;
pub use report::PackReport;
