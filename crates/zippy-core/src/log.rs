//! Injectable diagnostic logging.
//!
//! The pipelines report progress through a [`Logger`] supplied by the caller
//! instead of printing directly. The CLI renders messages to the terminal;
//! tests use [`MemoryLogger`] to inspect what was reported.

use std::cell::RefCell;

/// Severity of a logged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The operation failed.
    Error,
    /// Something was skipped or looks suspicious.
    Warning,
    /// The operation completed.
    Success,
    /// Routine progress information.
    Info,
}

impl Severity {
    /// Tag printed in front of messages of this severity.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERROR:",
            Self::Warning => "WARNING:",
            Self::Success => "SUCCESS:",
            Self::Info => "LOG:",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag().trim_end_matches(':'))
    }
}

/// Sink for diagnostic messages, one method per severity.
///
/// Implementations must not fail; rendering problems are swallowed.
pub trait Logger {
    /// Reports a failure.
    fn error(&self, message: &str);

    /// Reports a skipped entry or other non-fatal problem.
    fn warning(&self, message: &str);

    /// Reports successful completion.
    fn success(&self, message: &str);

    /// Reports routine progress.
    fn info(&self, message: &str);

    /// Dispatches on `severity`.
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => self.error(message),
            Severity::Warning => self.warning(message),
            Severity::Success => self.success(message),
            Severity::Info => self.info(message),
        }
    }
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn error(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
}

/// Logger that keeps every message in memory.
///
/// # Examples
///
/// ```
/// use zippy_core::log::Logger;
/// use zippy_core::log::MemoryLogger;
/// use zippy_core::log::Severity;
///
/// let logger = MemoryLogger::new();
/// logger.info("removing old archive");
/// assert!(logger.contains(Severity::Info, "old archive"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RefCell<Vec<(Severity, String)>>,
}

impl MemoryLogger {
    /// Creates an empty logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all records in logging order.
    #[must_use]
    pub fn records(&self) -> Vec<(Severity, String)> {
        self.records.borrow().clone()
    }

    /// Returns the messages logged with `severity`.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Returns `true` if a message of `severity` contains `needle`.
    #[must_use]
    pub fn contains(&self, severity: Severity, needle: &str) -> bool {
        self.records
            .borrow()
            .iter()
            .any(|(s, m)| *s == severity && m.contains(needle))
    }

    /// Renders the records as `TAG: message` lines.
    #[must_use]
    pub fn render(&self) -> String {
        self.records
            .borrow()
            .iter()
            .map(|(s, m)| format!("{} {m}\n", s.tag()))
            .collect()
    }

    fn push(&self, severity: Severity, message: &str) {
        self.records
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn error(&self, message: &str) {
        self.push(Severity::Error, message);
    }

    fn warning(&self, message: &str) {
        self.push(Severity::Warning, message);
    }

    fn success(&self, message: &str) {
        self.push(Severity::Success, message);
    }

    fn info(&self, message: &str) {
        self.push(Severity::Info, message);
    }
}
