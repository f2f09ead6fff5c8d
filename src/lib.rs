//! # RedQuill
//!
//! A synchronous logger that counts the errors and warnings it emits,
//! routes panics into the log, and renders previews of tabular data.
//!
//! ## Features
//!
//! - **Level counters**: error and warning totals, readable at any time
//! - **Panic routing**: an explicitly installed hook logs uncaught panics
//! - **Table previews**: head/tail, duplicate-row and missing-value warnings
//! - **Console and file output** sharing one line layout

pub mod appenders;
pub mod core;
pub mod macros;
pub mod table;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        initialize_logger, install_panic_hook, Appender, LevelCounters, LogEntry, LogLevel,
        Logger, LoggerBuilder, LoggerConfig, LoggerError, PanicHook, Result, TimestampFormat,
        DEFAULT_HEAD_TAIL_ROWS, DEFAULT_TABLE_ROWS,
    };
    pub use crate::table::{Cell, Table, TableError, TableSource, TableView};
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    initialize_logger, install_panic_hook, Appender, LevelCounters, LineFormatter, LogEntry,
    LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, PanicHook, Result,
    TimestampFormat, DEFAULT_HEAD_TAIL_ROWS, DEFAULT_LOG_FILE_NAME, DEFAULT_TABLE_ROWS,
};
pub use crate::table::{Cell, Table, TableError, TableSource, TableView};
