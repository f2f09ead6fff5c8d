//! Line layout shared by every appender
//!
//! Console and file output use the same layout:
//!
//! ```text
//! 2025-01-08 10:30:45,123 - 4242 - WARNING - app::loader::load - message
//! ```

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

const SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFormatter {
    timestamp_format: TimestampFormat,
}

impl LineFormatter {
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self { timestamp_format }
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Format an entry without a trailing newline.
    pub fn format(&self, entry: &LogEntry) -> String {
        self.format_with_level(entry, entry.level.to_str())
    }

    /// Format an entry with a pre-rendered level name (used for colored output).
    pub fn format_with_level(&self, entry: &LogEntry, level_name: &str) -> String {
        let timestamp_str = self.timestamp_format.format(&entry.timestamp);
        [
            timestamp_str.as_str(),
            &entry.process_id.to_string(),
            level_name,
            &entry.origin(),
            &entry.message,
        ]
        .join(SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use chrono::{TimeZone, Utc};

    fn fixed_entry(message: &str) -> LogEntry {
        let mut entry = LogEntry::new(LogLevel::Warning, message.to_string())
            .with_location("src/loader.rs", 7, "app::loader")
            .with_function("app::loader::load");
        entry.timestamp = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        entry.process_id = 4242;
        entry
    }

    #[test]
    fn test_line_layout() {
        let line = LineFormatter::default().format(&fixed_entry("disk almost full"));
        assert_eq!(
            line,
            "2025-01-08 10:30:45,000 - 4242 - WARNING - app::loader::load - disk almost full"
        );
    }

    #[test]
    fn test_multiline_message_spans_lines() {
        let line = LineFormatter::default().format(&fixed_entry("rows\n   A\n0  1"));
        let lines: Vec<&str> = line.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" - rows"));
        assert_eq!(lines[2], "0  1");
    }

    #[test]
    fn test_custom_timestamp() {
        let formatter = LineFormatter::new(TimestampFormat::Unix);
        let line = formatter.format(&fixed_entry("x"));
        assert!(line.starts_with("1736332245 - 4242 - "));
    }
}
