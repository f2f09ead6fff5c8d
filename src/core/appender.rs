//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A sink receiving formatted records.
///
/// `append` is called synchronously from the logging call and must have
/// written the record (or failed) by the time it returns.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
