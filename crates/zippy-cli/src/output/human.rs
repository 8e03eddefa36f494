//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use crate::error::describe;
use anyhow::Result;
use console::Term;
use console::style;
use zippy_core::Logger;
use zippy_core::PackReport;
use zippy_core::UnpackReport;
use zippy_core::log::Severity;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (count, c) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }

        result.chars().rev().collect()
    }

    fn tag(&self, severity: Severity) -> String {
        if !self.use_colors {
            return severity.tag().to_string();
        }
        let tag = style(severity.tag()).bold();
        match severity {
            Severity::Error => tag.red(),
            Severity::Warning => tag.yellow(),
            Severity::Success => tag.green(),
            Severity::Info => tag.cyan(),
        }
        .to_string()
    }

    fn line(&self, severity: Severity, message: &str) {
        // Errors are shown even in quiet mode
        if self.quiet && severity != Severity::Error {
            return;
        }
        // Terminal write errors are ignored
        let _ = self
            .term
            .write_line(&format!("{} {message}", self.tag(severity)));
    }

    fn detail(&self, label: &str, value: &str) {
        // Terminal write errors are ignored
        let _ = self.term.write_line(&format!("  {label:<17} {value}"));
    }
}

impl Logger for HumanFormatter {
    fn error(&self, message: &str) {
        self.line(Severity::Error, message);
    }

    fn warning(&self, message: &str) {
        self.line(Severity::Warning, message);
    }

    fn success(&self, message: &str) {
        self.line(Severity::Success, message);
    }

    fn info(&self, message: &str) {
        self.line(Severity::Info, message);
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(&self, report: &PackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.detail("Files added:", &Self::format_number(report.files_added));
        self.detail("Directories:", &Self::format_number(report.directories_added));
        self.detail("Total size:", &Self::format_size(report.bytes_written));

        if report.bytes_compressed > 0 {
            self.detail("Archive size:", &Self::format_size(report.bytes_compressed));
        }

        if report.entries_skipped > 0 {
            self.detail("Entries skipped:", &report.entries_skipped.to_string());
        }

        if self.verbose {
            self.detail("Duration:", &format!("{:?}", report.duration));
        }

        Ok(())
    }

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.detail("Files extracted:", &Self::format_number(report.files_extracted));
        self.detail(
            "Directories:",
            &Self::format_number(report.directories_created),
        );
        self.detail("Total size:", &Self::format_size(report.bytes_written));

        if self.verbose {
            self.detail("Duration:", &format!("{:?}", report.duration));
        }

        Ok(())
    }

    fn format_error(&self, _operation: &str, error: &anyhow::Error) {
        self.line(Severity::Error, &describe(error));
    }
}
