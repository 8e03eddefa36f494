//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use zippy_core::Logger;
use zippy_core::PackReport;
use zippy_core::UnpackReport;

/// Common output formatter trait
///
/// Formatters double as the [`Logger`] handed to zippy-core, so progress
/// messages and results share one rendering.
pub trait OutputFormatter: Logger {
    /// Format pack result
    fn format_pack_result(&self, report: &PackReport) -> Result<()>;

    /// Format unpack result
    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()>;

    /// Format a failed operation
    fn format_error(&self, operation: &str, error: &anyhow::Error);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
            code: None,
        }
    }
}

impl JsonOutput<()> {
    pub fn error(
        operation: impl Into<String>,
        error: impl Into<String>,
        code: &'static str,
    ) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
            code: Some(code),
        }
    }
}
