//! Archive library access.
//!
//! [`traits`] defines the capabilities the pipelines need, [`self::zip`] implements
//! them with the `zip` crate and [`guard`] ties a write handle to a scope.

pub mod guard;
pub mod traits;
pub mod zip;

pub use guard::ArchiveGuard;
pub use traits::ArchiveSink;
pub use traits::ArchiveSource;
pub use traits::BackendError;
pub use traits::BackendResult;
pub use self::zip::ZipSink;
pub use self::zip::ZipSource;
