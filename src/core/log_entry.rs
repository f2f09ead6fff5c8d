//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::panic::Location;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub process_id: u32,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub module_path: Option<String>,
    pub function: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message,
            timestamp: Utc::now(),
            process_id: std::process::id(),
            file: None,
            line: None,
            module_path: None,
            function: None,
        }
    }

    pub fn with_location(mut self, file: &str, line: u32, module_path: &str) -> Self {
        self.file = Some(file.to_string());
        self.line = Some(line);
        self.module_path = Some(module_path.to_string());
        self
    }

    /// Record the call site captured by `#[track_caller]`.
    pub fn with_caller(mut self, location: &Location<'_>) -> Self {
        self.file = Some(location.file().to_string());
        self.line = Some(location.line());
        self
    }

    pub fn with_function(mut self, function: &str) -> Self {
        self.function = Some(function.to_string());
        self
    }

    /// Where the record came from, most specific first:
    /// `module::function`, then the module path, then `file:line`.
    pub fn origin(&self) -> String {
        if let Some(ref function) = self.function {
            return function.clone();
        }
        if let Some(ref module_path) = self.module_path {
            return module_path.clone();
        }
        match (&self.file, self.line) {
            (Some(file), Some(line)) => format!("{}:{}", file, line),
            (Some(file), None) => file.clone(),
            _ => "-".to_string(),
        }
    }
}
