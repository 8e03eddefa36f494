//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use crate::error::describe;
use crate::error::error_code;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use zippy_core::Logger;
use zippy_core::PackReport;
use zippy_core::UnpackReport;

/// Emits one JSON document per finished operation.
///
/// Progress messages are not printed; warnings travel inside the report.
pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct PackOutput {
    archive: String,
    files_added: usize,
    directories_added: usize,
    bytes_written: u64,
    bytes_compressed: u64,
    compression_ratio: f64,
    entries_skipped: usize,
    duration_ms: u128,
    warnings: Vec<String>,
}

impl From<&PackReport> for PackOutput {
    fn from(report: &PackReport) -> Self {
        Self {
            archive: report.archive.display().to_string(),
            files_added: report.files_added,
            directories_added: report.directories_added,
            bytes_written: report.bytes_written,
            bytes_compressed: report.bytes_compressed,
            compression_ratio: report.compression_ratio(),
            entries_skipped: report.entries_skipped,
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        }
    }
}

#[derive(Serialize)]
struct UnpackOutput {
    destination: String,
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    duration_ms: u128,
}

impl From<&UnpackReport> for UnpackOutput {
    fn from(report: &UnpackReport) -> Self {
        Self {
            destination: report.destination.display().to_string(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl Logger for JsonFormatter {
    fn error(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, report: &PackReport) -> Result<()> {
        Self::output(&JsonOutput::success("pack", PackOutput::from(report)))
    }

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        Self::output(&JsonOutput::success("unpack", UnpackOutput::from(report)))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error(operation, describe(error), error_code(error));
        // Stdout write errors are ignored
        let _ = Self::output(&output);
    }
}
