//! Logging macros for ergonomic log message formatting.
//!
//! Unlike the [`Logger`](crate::Logger) methods, the macros record the
//! calling module and function, so the line origin reads
//! `my_app::loader::load` instead of `src/loader.rs:42`. The message is only
//! formatted when the level is enabled.
//!
//! # Examples
//!
//! ```
//! use redquill::prelude::*;
//! use redquill::{info, warning};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let rows = 42;
//! warning!(logger, "{} rows were skipped", rows);
//! assert_eq!(logger.warning_count(), 1);
//! ```

/// Full path of the enclosing function, e.g. `my_app::loader::load`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// Log a message at the given level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use redquill::prelude::*;
/// # let logger = Logger::new();
/// use redquill::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// assert_eq!(logger.error_count(), 1);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let level = $level;
        let logger = &$logger;
        if logger.is_enabled(level) {
            logger.log_entry(
                $crate::LogEntry::new(level, format!($($arg)+))
                    .with_location(file!(), line!(), module_path!())
                    .with_function($crate::function_name!()),
            );
        }
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Alias of [`warning!`].
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use redquill::prelude::*;
/// # let logger = Logger::new();
/// use redquill::error;
/// let path = "/data/input.csv";
/// error!(logger, "Failed to open {}", path);
/// assert_eq!(logger.error_count(), 1);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
