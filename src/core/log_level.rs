//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered from least to most severe.
///
/// The numeric discriminants follow the conventional logging values
/// (`10` for debug through `50` for critical), so a level can also be
/// configured by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Debug = 10,
    #[default]
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

/// Static name lookup, including the accepted aliases.
///
/// `NOTSET` lets every record through, which is the lowest level.
const LEVEL_NAMES: &[(&str, LogLevel)] = &[
    ("NOTSET", LogLevel::Debug),
    ("DEBUG", LogLevel::Debug),
    ("INFO", LogLevel::Info),
    ("WARNING", LogLevel::Warning),
    ("WARN", LogLevel::Warning),
    ("ERROR", LogLevel::Error),
    ("CRITICAL", LogLevel::Critical),
    ("FATAL", LogLevel::Critical),
];

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Numeric value of the level (`10`, `20`, ... `50`).
    pub fn as_number(&self) -> u32 {
        *self as u32
    }

    /// Resolve a numeric level. `0` (NOTSET) maps to [`LogLevel::Debug`].
    pub fn from_number(value: u32) -> Option<Self> {
        match value {
            0 | 10 => Some(LogLevel::Debug),
            20 => Some(LogLevel::Info),
            30 => Some(LogLevel::Warning),
            40 => Some(LogLevel::Error),
            50 => Some(LogLevel::Critical),
            _ => None,
        }
    }

    /// Levels that feed the error or warning counters.
    pub fn is_counted(&self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_uppercase();

        if let Some((_, level)) = LEVEL_NAMES.iter().find(|(name, _)| *name == upper) {
            return Ok(*level);
        }

        trimmed
            .parse::<u32>()
            .ok()
            .and_then(LogLevel::from_number)
            .ok_or_else(|| format!("Invalid log level: '{}'", s))
    }
}
