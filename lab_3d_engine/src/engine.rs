/// Lab3D Engine - process-wide logging entry point
///
/// Scene state and the shared mesh are owned by the application and passed
/// explicitly. The only global is the logger, so that every module can report
/// through the same sink via the `engine_*!` macros.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

/// Engine-wide services
///
/// # Example
///
/// ```no_run
/// use lab_3d_engine::lab3d::{Engine, log::{DefaultLogger, LogSeverity}};
///
/// Engine::set_logger(DefaultLogger::with_min_severity(LogSeverity::Info));
/// Engine::log(LogSeverity::Info, "app", "starting".to_string());
/// ```
pub struct Engine;

impl Engine {
    /// Set a custom logger
    ///
    /// # Arguments
    ///
    /// * `logger` - Any type implementing the Logger trait
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to `DefaultLogger::default()`
    pub fn reset_logger() {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log without source location
    ///
    /// Used by engine_trace!, engine_debug!, engine_info! and engine_warn!.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Log with file:line information
    ///
    /// Used by engine_error! so failures point at their call site.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if let Ok(lock) = self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
