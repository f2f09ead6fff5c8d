//! Main logger implementation

use super::{
    appender::Appender,
    counters::LevelCounters,
    error::{LoggerError, Result},
    line_format::LineFormatter,
    log_entry::LogEntry,
    log_level::LogLevel,
    panic_hook::{self, PanicHook},
};
use crate::table::{Table, TableError, TableSource};
use parking_lot::{Mutex, RwLock};
use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::cell::Cell;
use std::panic::{Location, PanicHookInfo};
use std::sync::Arc;
use std::time::Duration;

/// Rows shown by [`Logger::log_table`] when no other count is wanted.
pub const DEFAULT_TABLE_ROWS: usize = 10;

/// Rows shown in each half of [`Logger::log_table_head_tail`] by default.
pub const DEFAULT_HEAD_TAIL_ROWS: usize = 5;

const INVALID_TABLE_MESSAGE: &str = "no dataframe was passed in...";

/// Longest wait for the appender lock from inside the panic hook. The
/// panicking thread may already hold it.
const PANIC_LOCK_TIMEOUT: Duration = Duration::from_millis(100);

thread_local! {
    /// Set while this thread is inside an appender call. A panic raised
    /// there is caught by `process_sync` and must not reach the log again.
    static IN_APPENDER: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as dispatching for as long as it lives.
struct AppenderScope {
    was_set: bool,
}

impl AppenderScope {
    fn enter() -> Self {
        Self {
            was_set: IN_APPENDER.with(|flag| flag.replace(true)),
        }
    }
}

impl Drop for AppenderScope {
    fn drop(&mut self) {
        IN_APPENDER.with(|flag| flag.set(self.was_set));
    }
}

fn in_appender() -> bool {
    IN_APPENDER.with(Cell::get)
}

/// A synchronous logger that counts the errors and warnings it emits.
///
/// Every record is gated on the minimum level, written to every appender
/// before the call returns, and then counted.
///
/// Records written through these methods carry the caller's `file:line` as
/// their origin. The [logging macros](crate::macros) record
/// `module::function` instead, which is the layout the line format
/// documents; prefer them in application code.
///
/// # Example
///
/// ```
/// use redquill::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Info)
///     .appender(ConsoleAppender::with_colors(false))
///     .build();
///
/// logger.debug("hidden");
/// logger.error("x");
/// logger.warning("y");
/// logger.warn("y");
///
/// assert_eq!(logger.error_count(), 1);
/// assert_eq!(logger.warning_count(), 2);
/// ```
pub struct Logger {
    min_level: RwLock<LogLevel>,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
    counters: LevelCounters,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Info),
            appenders: Mutex::new(Vec::new()),
            counters: LevelCounters::new(),
        }
    }

    /// Write an entry to every appender with per-appender panic isolation.
    ///
    /// One failing appender doesn't prevent the others from receiving the
    /// entry. Returns `true` if any appender failed.
    fn process_sync(
        appenders: &mut [Box<dyn Appender>],
        entry: &LogEntry,
        counters: &LevelCounters,
    ) -> bool {
        let mut has_error = false;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                let _scope = AppenderScope::enter();
                appender.append(entry)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Appender '{}' (#{}) failed: {}", appender.name(), idx, e);
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        idx,
                        panic_hook::panic_message(panic_info.as_ref())
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            counters.record_dropped();
        } else {
            counters.record_logged();
        }

        has_error
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.appenders.lock().push(appender);
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.lock().len()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Whether a record at `level` would be emitted.
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= *self.min_level.read()
    }

    /// Dispatch then count. Callers have already checked the gate.
    fn emit(&self, entry: LogEntry) {
        let level = entry.level;
        {
            let mut appenders = self.appenders.lock();
            Self::process_sync(&mut appenders, &entry, &self.counters);
        }
        self.counters.record_level(level);
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message.into()).with_caller(Location::caller());
        self.emit(entry);
    }

    /// Emit a pre-built entry, gated on its level. Used by the logging macros.
    pub fn log_entry(&self, entry: LogEntry) {
        if !self.is_enabled(entry.level) {
            return;
        }
        self.emit(entry);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Alias of [`Logger::warning`].
    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }

    /// Record a panic as an uncaught error, with its payload and a backtrace.
    ///
    /// Called by the hook from [`Logger::install_panic_hook`]. Panics raised
    /// by an appender while a record is written are caught and reported by
    /// the logger itself, so they are neither logged here nor counted.
    pub fn log_exception(&self, info: &PanicHookInfo<'_>) {
        if in_appender() {
            return;
        }
        let description = format!(
            "thread '{}' panicked at {}:\n{}",
            std::thread::current().name().unwrap_or("<unnamed>"),
            info.location()
                .map_or_else(|| "<unknown>".to_string(), ToString::to_string),
            panic_hook::panic_message(info.payload())
        );
        self.log_uncaught(&description, info.location());
    }

    pub(crate) fn log_uncaught(&self, description: &str, location: Option<&Location<'_>>) {
        if in_appender() || !self.is_enabled(LogLevel::Error) {
            return;
        }

        let message = format!(
            "Uncaught exception.\n{}\nstack backtrace:\n{}",
            description,
            Backtrace::force_capture()
        );
        let mut entry = LogEntry::new(LogLevel::Error, message);
        if let Some(location) = location {
            entry = entry.with_caller(location);
        }

        match self.appenders.try_lock_for(PANIC_LOCK_TIMEOUT) {
            Some(mut appenders) => {
                Self::process_sync(&mut appenders, &entry, &self.counters);
                for appender in appenders.iter_mut() {
                    if let Err(e) = appender.flush() {
                        eprintln!(
                            "[LOGGER ERROR] Appender '{}' failed to flush after a panic: {}",
                            appender.name(),
                            e
                        );
                    }
                }
            }
            None => {
                self.counters.record_dropped();
                eprintln!("{}", LineFormatter::default().format(&entry));
            }
        }
        self.counters.record_level(LogLevel::Error);
    }

    /// Install this logger's panic hook process-wide.
    ///
    /// See [`install_panic_hook`](crate::install_panic_hook).
    pub fn install_panic_hook(self: &Arc<Self>) -> PanicHook {
        panic_hook::install_panic_hook(Arc::clone(self))
    }

    /// Log an invalid table input at error level and hand back the error.
    #[track_caller]
    fn report_invalid_table(&self, err: TableError) -> LoggerError {
        let message = match err {
            TableError::UnknownColumn(_) => format!("invalid column subset ({})", err),
            _ => format!("{} ({})", INVALID_TABLE_MESSAGE, err),
        };
        self.log(LogLevel::Error, message);
        LoggerError::Table(err)
    }

    #[track_caller]
    fn validate_table<'t, T: TableSource + ?Sized>(&self, candidate: &'t T) -> Result<Cow<'t, Table>> {
        match candidate.to_table() {
            Ok(table) => Ok(table),
            Err(err) => Err(self.report_invalid_table(err)),
        }
    }

    /// Whether `candidate` is a usable table.
    ///
    /// A rejected candidate is also logged (and counted) as an error.
    #[track_caller]
    pub fn is_table<T: TableSource + ?Sized>(&self, candidate: &T) -> bool {
        self.validate_table(candidate).is_ok()
    }

    /// Log `message` followed by the first `n` rows of `table`.
    ///
    /// # Example
    ///
    /// ```
    /// use redquill::{Logger, LogLevel, Table, DEFAULT_TABLE_ROWS};
    ///
    /// let logger = Logger::new();
    /// let table = Table::from_columns([("A", vec![1, 2, 3])])?;
    /// logger.log_table(&table, DEFAULT_TABLE_ROWS, "loaded rows", LogLevel::Info)?;
    ///
    /// // Loosely typed input that isn't a table is logged as an error.
    /// let input = serde_json::json!("not a table");
    /// assert!(logger.log_table(&input, 10, "", LogLevel::Info).is_err());
    /// assert_eq!(logger.error_count(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[track_caller]
    pub fn log_table<T: TableSource + ?Sized>(
        &self,
        table: &T,
        n: usize,
        message: &str,
        level: LogLevel,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let table = self.validate_table(table)?;
        self.log(level, format!("{}\n{}", message, table.head(n)));
        Ok(())
    }

    /// Log `message` followed by the first and last `n` rows of `table`.
    #[track_caller]
    pub fn log_table_head_tail<T: TableSource + ?Sized>(
        &self,
        table: &T,
        n: usize,
        message: &str,
        level: LogLevel,
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let table = self.validate_table(table)?;
        self.log(
            level,
            format!("{}\nHEAD\n{}\nTAIL\n{}", message, table.head(n), table.tail(n)),
        );
        Ok(())
    }

    /// Warn with every row whose `subset` values occur more than once.
    ///
    /// `None` compares all columns. Nothing is logged without duplicates.
    #[track_caller]
    pub fn warn_duplicate_rows<T: TableSource + ?Sized>(
        &self,
        table: &T,
        subset: Option<&[&str]>,
        message: &str,
    ) -> Result<()> {
        if !self.is_enabled(LogLevel::Warning) {
            return Ok(());
        }

        let table = self.validate_table(table)?;
        let duplicates = match table.duplicated_rows(subset) {
            Ok(view) => view,
            Err(err) => return Err(self.report_invalid_table(err)),
        };
        if !duplicates.is_empty() {
            self.log(LogLevel::Warning, format!("{}\n{}", message, duplicates));
        }
        Ok(())
    }

    /// Warn with every row holding a missing value. Nothing is logged otherwise.
    #[track_caller]
    pub fn warn_null_rows<T: TableSource + ?Sized>(&self, table: &T, message: &str) -> Result<()> {
        if !self.is_enabled(LogLevel::Warning) {
            return Ok(());
        }

        let table = self.validate_table(table)?;
        let nulls = table.null_rows();
        if !nulls.is_empty() {
            self.log(LogLevel::Warning, format!("{}\n{}", message, nulls));
        }
        Ok(())
    }

    /// Number of error records emitted so far.
    pub fn error_count(&self) -> u64 {
        self.counters.error_count()
    }

    /// Number of warning records emitted so far.
    pub fn warning_count(&self) -> u64 {
        self.counters.warning_count()
    }

    #[track_caller]
    pub fn log_error_count(&self) {
        self.log(LogLevel::Info, format!("TOTAL ERRORS: {}", self.error_count()));
    }

    #[track_caller]
    pub fn log_warning_count(&self) {
        self.log(LogLevel::Info, format!("TOTAL WARNINGS: {}", self.warning_count()));
    }

    /// Records at least one appender failed to write.
    pub fn dropped_count(&self) -> u64 {
        self.counters.dropped_count()
    }

    /// Records every appender accepted.
    pub fn total_logged(&self) -> u64 {
        self.counters.total_logged()
    }

    pub fn counters(&self) -> &LevelCounters {
        &self.counters
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    /// Flush and release every appender, closing the log file.
    ///
    /// Records emitted afterwards are still gated and counted but go nowhere.
    pub fn shutdown(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        let result = appenders.iter_mut().try_for_each(|appender| appender.flush());
        appenders.clear();
        result
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let dropped = self.counters.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} records that failed to write",
                dropped
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use redquill::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .appender(ConsoleAppender::new())
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            appenders: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger::new();
        logger.set_min_level(self.min_level);
        for appender in self.appenders {
            logger.add_appender(appender);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
