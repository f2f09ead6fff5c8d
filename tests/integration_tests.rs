//! Integration tests for the counting logger
//!
//! These tests verify:
//! - Level gating and counting end to end
//! - Table previews written through a file appender
//! - Invalid table input handling
//! - The `initialize_logger` factory

use parking_lot::Mutex;
use redquill::prelude::*;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Clone, Default)]
struct CaptureAppender {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Appender for CaptureAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

fn capture_logger(level: LogLevel) -> (Logger, Arc<Mutex<Vec<LogEntry>>>) {
    let capture = CaptureAppender::default();
    let entries = Arc::clone(&capture.entries);
    let logger = Logger::builder().min_level(level).appender(capture).build();
    (logger, entries)
}

fn sample_table() -> Table {
    Table::new()
        .with_column("A", [Some(1.0), Some(2.0), None, Some(3.0)])
        .expect("column A")
        .with_column("B", [4, 2, 2, 5])
        .expect("column B")
}

#[test]
fn test_console_only_counts() {
    let logger = initialize_logger(None, None, "INFO").expect("valid level");

    logger.error("x");
    logger.warning("y");
    logger.warning("y");

    assert_eq!(logger.error_count(), 1);
    assert_eq!(logger.warning_count(), 2);
}

#[test]
fn test_below_level_produces_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = initialize_logger(Some(temp_dir.path()), Some("quiet.log"), "ERROR")
        .expect("valid level");

    logger.debug("no");
    logger.info("no");
    logger.warning("no");
    logger.flush().expect("Failed to flush");

    assert_eq!(logger.error_count(), 0);
    assert_eq!(logger.warning_count(), 0);
    let content = fs::read_to_string(temp_dir.path().join("quiet.log")).expect("log file");
    assert!(content.is_empty());
}

#[test]
fn test_duplicate_and_null_scenario() {
    let (logger, entries) = capture_logger(LogLevel::Info);
    let table = sample_table();

    logger
        .warn_duplicate_rows(&table, Some(&["B"]), "Duplicates on B.")
        .expect("valid table");
    assert_eq!(logger.warning_count(), 1);

    logger.warn_null_rows(&table, "").expect("valid table");
    assert_eq!(logger.warning_count(), 2);

    let entries = entries.lock();
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0].message,
        "Duplicates on B.\n     A  B\n1  2.0  2\n2  NaN  2"
    );
    assert_eq!(entries[1].message, "\n     A  B\n2  NaN  2");
}

#[test]
fn test_table_previews_in_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = initialize_logger(Some(temp_dir.path()), Some("tables.log"), "INFO")
        .expect("valid level");

    let values: Vec<i64> = (0..20).collect();
    let shifted: Vec<i64> = (20..40).collect();
    let table = Table::from_columns([("A", values), ("B", shifted)]).expect("table");

    logger
        .log_table(&table, 1, "Test df info.", LogLevel::Info)
        .expect("valid table");
    logger
        .log_table_head_tail(&table, DEFAULT_HEAD_TAIL_ROWS, "", LogLevel::Info)
        .expect("valid table");
    logger.shutdown().expect("shutdown");

    let content = fs::read_to_string(temp_dir.path().join("tables.log")).expect("log file");
    let lines: Vec<&str> = content.lines().collect();

    // Message line, header, one row.
    assert!(lines[0].ends_with(" - Test df info."));
    assert_eq!(lines[1], "   A   B");
    assert_eq!(lines[2], "0  0  20");

    // Empty message line, then HEAD + 5 rows and TAIL + 5 rows with headers.
    assert!(lines[3].ends_with(" - "));
    assert_eq!(lines[4], "HEAD");
    assert_eq!(lines[10], "4  4  24");
    assert_eq!(lines[11], "TAIL");
    assert_eq!(lines[12], "     A   B");
    assert_eq!(lines[17], "19  19  39");
    assert_eq!(lines.len(), 18);
}

#[test]
fn test_non_table_inputs() {
    let (logger, entries) = capture_logger(LogLevel::Info);

    assert!(logger
        .log_table(&json!("df"), DEFAULT_TABLE_ROWS, "", LogLevel::Info)
        .is_err());
    assert!(logger
        .log_table_head_tail("1, 2, 3", DEFAULT_HEAD_TAIL_ROWS, "", LogLevel::Warning)
        .is_err());

    let entries = entries.lock();
    assert_eq!(entries.len(), 2);
    assert!(entries
        .iter()
        .all(|e| e.level == LogLevel::Error && e.message.starts_with("no dataframe was passed in...")));
    assert_eq!(logger.error_count(), 2);
    assert_eq!(logger.warning_count(), 0);
}

#[test]
fn test_json_records_are_tables() {
    let (logger, entries) = capture_logger(LogLevel::Info);
    let records = json!([
        {"id": 1, "city": "Oslo"},
        {"id": 2, "city": null},
        {"id": 1, "city": "Oslo"}
    ]);

    logger.warn_null_rows(&records, "missing city").expect("records");
    logger
        .warn_duplicate_rows(&records, None, "repeated")
        .expect("records");

    let entries = entries.lock();
    assert_eq!(entries[0].message, "missing city\n   id  city\n1   2   NaN");
    assert_eq!(entries[1].message, "repeated\n   id  city\n0   1  Oslo\n2   1  Oslo");
    assert_eq!(logger.warning_count(), 2);
}

#[test]
fn test_error_tracking() {
    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::other("Simulated failure"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "FailingAppender"
        }
    }

    let logger = Logger::builder().appender(FailingAppender).build();
    for _ in 0..5 {
        logger.warning("Test message");
    }

    assert_eq!(logger.dropped_count(), 5, "Should track all dropped logs");
    assert_eq!(logger.warning_count(), 5);
}

#[test]
fn test_line_layout_in_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("layout.log");

    let logger = Logger::builder()
        .appender(FileAppender::new(&log_file).expect("Failed to create appender"))
        .build();
    redquill::error!(logger, "code {}", 7);
    logger.shutdown().expect("shutdown");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let fields: Vec<&str> = content.trim_end().split(" - ").collect();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[1], std::process::id().to_string());
    assert_eq!(fields[2], "ERROR");
    assert_eq!(fields[3], "integration_tests::test_line_layout_in_file");
    assert_eq!(fields[4], "code 7");
}

#[test]
fn test_factory_rejects_custom_level() {
    let err = initialize_logger(None, Some("log_file.log"), "TEST")
        .err()
        .expect("custom levels are rejected");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn test_factory_accepts_numeric_levels() {
    let logger = initialize_logger(None, Some("log_file.log"), "20").expect("INFO by number");
    assert_eq!(logger.min_level(), LogLevel::Info);
}
