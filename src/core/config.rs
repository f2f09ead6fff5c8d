//! Logger configuration and the `initialize_logger` factory

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::Logger,
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when none is configured.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.log";

/// Construction parameters for a [`Logger`].
///
/// Every field has a default, so a configuration file only needs the keys
/// it changes:
///
/// ```
/// use redquill::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::from_json_str(r#"{ "level": "WARNING" }"#)?;
/// assert_eq!(config.min_level()?, LogLevel::Warning);
/// assert!(config.log_dir.is_none());
/// # Ok::<(), redquill::LoggerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory of the log file. Without it only the console is used.
    pub log_dir: Option<PathBuf>,
    /// Log file name inside `log_dir`; [`DEFAULT_LOG_FILE_NAME`] if unset.
    pub file_name: Option<String>,
    /// Level name (`"INFO"`, `"WARNING"`, ...) or number (`"20"`).
    pub level: String,
    pub use_colors: bool,
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            file_name: None,
            level: "NOTSET".to_string(),
            use_colors: cfg!(feature = "console"),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&content)
    }

    /// Resolve the configured level through the static level table.
    pub fn min_level(&self) -> Result<LogLevel> {
        self.level.parse().map_err(|_| {
            LoggerError::config(
                "level",
                format!("Custom levels not supported at this time: '{}'", self.level),
            )
        })
    }

    /// Full path of the log file, if a directory is configured.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| {
            dir.join(self.file_name.as_deref().unwrap_or(DEFAULT_LOG_FILE_NAME))
        })
    }

    /// Validate the configuration and build a logger with a console
    /// appender and, when a directory is set, a file appender.
    pub fn build(&self) -> Result<Logger> {
        let min_level = self.min_level()?;

        if self.log_dir.is_none() {
            eprintln!("[LOGGER WARNING] No log directory was specified, only logging to console.");
        }
        if self.file_name.is_none() {
            eprintln!(
                "[LOGGER WARNING] Log file name is not specified, using default name: {}",
                DEFAULT_LOG_FILE_NAME
            );
        }

        let mut builder = Logger::builder().min_level(min_level);
        if let Some(path) = self.log_path() {
            let file = FileAppender::new(path)?.with_timestamp_format(self.timestamp_format.clone());
            builder = builder.appender(file);
        }
        let console = ConsoleAppender::with_colors(self.use_colors)
            .with_timestamp_format(self.timestamp_format.clone());

        Ok(builder.appender(console).build())
    }
}

/// Build a logger from a directory, file name and level.
///
/// The level is resolved by name or number; anything else is a
/// configuration error and no logger is produced.
///
/// ```
/// use redquill::{initialize_logger, LoggerError};
///
/// let logger = initialize_logger(None, Some("app.log"), "INFO")?;
/// logger.info("console only");
///
/// let err = initialize_logger(None, None, "TEST").err().unwrap();
/// assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
/// # Ok::<(), LoggerError>(())
/// ```
pub fn initialize_logger(
    log_dir: Option<&Path>,
    file_name: Option<&str>,
    level: &str,
) -> Result<Logger> {
    LoggerConfig {
        log_dir: log_dir.map(Path::to_path_buf),
        file_name: file_name.map(str::to_string),
        level: level.to_string(),
        ..LoggerConfig::default()
    }
    .build()
}
