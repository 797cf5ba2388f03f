//! Read-only view of a log record.
//!
//! The logging framework owns its records; keying only ever reads them through
//! the [`LogRecord`] trait. [`LogEvent`] is the owned implementation used by
//! the appender and the command line tool.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// The fields of a log record that keying strategies may read.
///
/// Implementations must not hand out anything mutable: strategies are invoked
/// concurrently from every thread that logs.
pub trait LogRecord: Send + Sync {
    fn logger_name(&self) -> &str;

    fn level(&self) -> Level;

    /// The message after parameter substitution.
    fn message(&self) -> &str;

    /// Milliseconds since the Unix epoch.
    fn timestamp(&self) -> i64;

    /// Name of the thread that emitted the record, empty when unknown.
    fn thread_name(&self) -> &str;
}

/// An owned log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub logger: String,
    pub level: Level,
    pub message: String,
    pub ts_ms: i64,
    #[serde(default)]
    pub thread: String,
}

impl LogEvent {
    /// Creates an event stamped with the current time and the calling thread's name.
    pub fn new(logger: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            logger: logger.into(),
            level,
            message: message.into(),
            ts_ms: Utc::now().timestamp_millis(),
            thread: std::thread::current().name().unwrap_or_default().to_string(),
        }
    }

    pub fn with_timestamp(mut self, ts_ms: i64) -> Self {
        self.ts_ms = ts_ms;
        self
    }

    pub fn with_thread_name(mut self, thread: impl Into<String>) -> Self {
        self.thread = thread.into();
        self
    }
}

impl LogRecord for LogEvent {
    fn logger_name(&self) -> &str {
        &self.logger
    }

    fn level(&self) -> Level {
        self.level
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn timestamp(&self) -> i64 {
        self.ts_ms
    }

    fn thread_name(&self) -> &str {
        &self.thread
    }
}
