//! Stock logging sinks.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::level::LogLevel;
use crate::logger::Logger;

/// Writes `[Level] message` lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    pub fn format_line(message: &str, level: LogLevel) -> String {
        format!("[{level}] {message}")
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str, level: LogLevel) {
        let line = Self::format_line(message, level);
        // A closed stdout must not take the catalogue operation down with it.
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }
}

/// Writes `<local time> [Level] <prefix><message>` lines to standard output.
#[derive(Debug, Default, Clone)]
pub struct TimestampedLogger {
    prefix: String,
}

impl TimestampedLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line gets `prefix` inserted right before the message.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn format_line(&self, at: DateTime<Local>, message: &str, level: LogLevel) -> String {
        format!(
            "{} [{level}] {}{message}",
            at.format("%Y-%m-%d %H:%M:%S"),
            self.prefix
        )
    }
}

impl Logger for TimestampedLogger {
    fn log(&self, message: &str, level: LogLevel) {
        let line = self.format_line(Local::now(), message, level);
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }
}

/// Forwards catalogue lines into `tracing` under the `vending` target.
///
/// Info maps to `INFO`, Warning to `WARN` and Critical to `ERROR`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, message: &str, level: LogLevel) {
        match level {
            LogLevel::Info => tracing::info!(target: "vending", "{message}"),
            LogLevel::Warning => tracing::warn!(target: "vending", "{message}"),
            LogLevel::Critical => tracing::error!(target: "vending", critical = true, "{message}"),
        }
    }
}

/// One recorded log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every line in memory (tests, diagnostics endpoints).
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn count_at(&self, level: LogLevel) -> usize {
        self.lock().iter().filter(|r| r.level == level).count()
    }

    pub fn last(&self) -> Option<LogRecord> {
        self.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str, level: LogLevel) {
        self.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}
