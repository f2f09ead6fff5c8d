//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod counters;
pub mod error;
pub mod line_format;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod panic_hook;
pub mod timestamp;

pub use appender::Appender;
pub use config::{initialize_logger, LoggerConfig, DEFAULT_LOG_FILE_NAME};
pub use counters::LevelCounters;
pub use error::{LoggerError, Result};
pub use line_format::LineFormatter;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, DEFAULT_HEAD_TAIL_ROWS, DEFAULT_TABLE_ROWS};
pub use panic_hook::{install_panic_hook, PanicHook};
pub use timestamp::TimestampFormat;
