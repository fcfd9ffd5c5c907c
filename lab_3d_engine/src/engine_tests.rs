//! Unit tests for engine.rs
//!
//! The logger is process-wide, so every test that swaps it is #[serial].
//! Other unit tests may log concurrently; assertions filter on source tags.

use crate::lab3d::Engine;
use crate::lab3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

// ============================================================================
// LOGGER SWAP
// ============================================================================

#[test]
#[serial]
fn test_set_logger_receives_entries() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Info, "engine_tests::swap", "hello".to_string());

    let captured = from_source(&entries, "engine_tests::swap");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "hello");
    assert!(captured[0].file.is_none());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    Engine::log_detailed(LogSeverity::Error, "engine_tests::detailed", "boom".to_string(), "x.rs", 9);

    let captured = from_source(&entries, "engine_tests::detailed");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("x.rs"));
    assert_eq!(captured[0].line, Some(9));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_macros_route_through_engine() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    crate::engine_trace!("engine_tests::macros", "t {}", 1);
    crate::engine_debug!("engine_tests::macros", "d {}", 2);
    crate::engine_info!("engine_tests::macros", "i {}", 3);
    crate::engine_warn!("engine_tests::macros", "w {}", 4);
    crate::engine_error!("engine_tests::macros", "e {}", 5);

    let captured = from_source(&entries, "engine_tests::macros");
    let severities: Vec<LogSeverity> = captured.iter().map(|e| e.severity).collect();
    assert_eq!(
        severities,
        vec![
            LogSeverity::Trace,
            LogSeverity::Debug,
            LogSeverity::Info,
            LogSeverity::Warn,
            LogSeverity::Error,
        ]
    );
    assert_eq!(captured[4].message, "e 5");
    assert!(captured[4].line.is_some());
    assert!(captured[3].line.is_none());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_err_logs_before_returning() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);

    let err = crate::engine_err!("engine_tests::err", "lost {}", "context");

    let captured = from_source(&entries, "engine_tests::err");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].message, "lost context");
    assert_eq!(format!("{}", err), "Backend error: lost context");

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let (logger, entries) = CaptureLogger::new();
    Engine::set_logger(logger);
    Engine::reset_logger();

    Engine::log(LogSeverity::Warn, "engine_tests::reset", "after reset".to_string());

    assert!(from_source(&entries, "engine_tests::reset").is_empty());
}
