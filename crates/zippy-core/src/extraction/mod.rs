//! Unpacking a zip archive into a fresh sibling directory.

pub mod report;
pub mod unpacker;

pub use report::UnpackReport;
pub use unpacker::unpack_archive;
