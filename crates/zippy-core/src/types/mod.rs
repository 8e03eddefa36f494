//! Core types shared by the pack and unpack pipelines.

mod archive_path;
mod entry;
mod target_root;

pub use archive_path::ArchivePath;
pub use archive_path::PathRole;
pub use archive_path::ZIP_SUFFIX;
pub use entry::EntryKind;
pub use entry::EntryRecord;
pub use target_root::TargetRoot;
