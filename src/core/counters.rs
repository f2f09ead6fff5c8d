//! Per-level occurrence counters
//!
//! Counts error and warning records that passed the level gate, along with
//! sink health statistics.

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters kept by every [`Logger`](crate::Logger).
///
/// # Example
///
/// ```
/// use redquill::{LevelCounters, LogLevel};
///
/// let counters = LevelCounters::new();
/// counters.record_level(LogLevel::Error);
/// counters.record_level(LogLevel::Info);
///
/// assert_eq!(counters.error_count(), 1);
/// assert_eq!(counters.warning_count(), 0);
/// ```
#[derive(Debug)]
pub struct LevelCounters {
    /// Error records emitted
    errors: AtomicU64,

    /// Warning records emitted
    warnings: AtomicU64,

    /// Records every appender accepted
    total_logged: AtomicU64,

    /// Records at least one appender failed to write
    dropped_count: AtomicU64,
}

impl LevelCounters {
    pub const fn new() -> Self {
        Self {
            errors: AtomicU64::new(0),
            warnings: AtomicU64::new(0),
            total_logged: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn error_count(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn warning_count(&self) -> u64 {
        self.warnings.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    /// Count an emitted record. Only `Error` and `Warning` are tracked.
    #[inline]
    pub fn record_level(&self, level: LogLevel) {
        match level {
            LogLevel::Error => {
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
            LogLevel::Warning => {
                self.warnings.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
    }

    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for LevelCounters {
    fn default() -> Self {
        Self::new()
    }
}
