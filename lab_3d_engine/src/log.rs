//! Logging for the Lab3D engine
//!
//! A pluggable `Logger` sits behind `Engine::log`. The default writes
//! colored lines to stdout; tests and applications can swap it out.
//! ERROR entries carry the file:line of the call site.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route engine messages elsewhere (a file, a test buffer, ...)
///
/// # Example
///
/// ```no_run
/// use lab_3d_engine::lab3d::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    ///
    /// # Arguments
    ///
    /// * `entry` - The log entry to process
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source tag (e.g., "lab3d::MeshRegistry", "lab3d::Scene")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Source line (ERROR entries only)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame detail (camera basis, throttled spawns)
    Trace,

    /// Development information
    Debug,

    /// Lifecycle events (mesh upload/release)
    Info,

    /// Tolerated caller mistakes (empty mesh, unknown model key)
    Warn,

    /// Collaborator failures, logged with file:line
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by `DefaultLogger`
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Console logger with colored severities.
///
/// Entries below `min_severity` are dropped. Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
#[derive(Debug, Clone, Copy)]
pub struct DefaultLogger {
    min_severity: LogSeverity,
}

impl DefaultLogger {
    /// Logger that prints everything at `min_severity` and above
    pub fn with_min_severity(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    /// Lowest severity this logger prints
    pub fn min_severity(&self) -> LogSeverity {
        self.min_severity
    }

    /// Render an entry without printing it
    pub fn format_entry(&self, entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        let source = entry.source.bright_blue();

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity, source, entry.message, file, line
            ),
            _ => format!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message),
        }
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::with_min_severity(LogSeverity::Debug)
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.severity < self.min_severity {
            return;
        }
        println!("{}", self.format_entry(entry));
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// # Example
///
/// ```ignore
/// engine_trace!("lab3d::Camera", "yaw={} pitch={}", yaw, pitch);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::lab3d::Engine::log(
            $crate::lab3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```ignore
/// engine_debug!("lab3d::Scene", "Spawned model {:?}", key);
/// ```
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::lab3d::Engine::log(
            $crate::lab3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```ignore
/// engine_info!("lab3d::MeshRegistry", "Shared mesh uploaded ({} indices)", count);
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::lab3d::Engine::log(
            $crate::lab3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
///
/// # Example
///
/// ```ignore
/// engine_warn!("lab3d::MeshRegistry", "Ignoring empty mesh upload");
/// ```
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::lab3d::Engine::log(
            $crate::lab3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```ignore
/// engine_error!("lab3d::gl", "Failed to link program: {}", error);
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::lab3d::Engine::log_detailed(
            $crate::lab3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
