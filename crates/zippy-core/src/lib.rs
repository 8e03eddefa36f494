//! Pack directory trees into zip archives and unpack them back.
//!
//! `zippy-core` validates every path argument before touching the
//! filesystem, replaces stale output instead of merging into it, and never
//! leaves a half-written archive behind.
//!
//! # Examples
//!
//! ```no_run
//! use zippy_core::log::NoopLogger;
//! use zippy_core::pack;
//! use zippy_core::unpack;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = pack("proj", "dist/proj.zip", &NoopLogger)?;
//! println!("Packed {} entries", report.total_entries());
//!
//! let report = unpack("dist/proj.zip", &NoopLogger)?;
//! println!("Unpacked into {}", report.destination.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod log;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export main API types
pub use api::pack;
pub use api::pack_in;
pub use api::pack_or_log;
pub use api::unpack;
pub use api::unpack_in;
pub use api::unpack_or_log;
pub use creation::PackConfig;
pub use creation::PackReport;
pub use error::Result;
pub use error::ZippyError;
pub use extraction::UnpackReport;
pub use log::Logger;
