//! Property-based tests for redquill using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use redquill::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

struct CountingAppender(Arc<Mutex<usize>>);

impl Appender for CountingAppender {
    fn append(&mut self, _entry: &LogEntry) -> Result<()> {
        *self.0.lock() += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Small two-column tables with missing values, so duplicates are common.
fn small_table() -> impl Strategy<Value = (Vec<Option<i64>>, Vec<i64>)> {
    (0usize..12).prop_flat_map(|rows| {
        (
            prop::collection::vec(prop::option::of(0i64..3), rows),
            prop::collection::vec(0i64..3, rows),
        )
    })
}

fn build_table(a: &[Option<i64>], b: &[i64]) -> Table {
    Table::new()
        .with_column("A", a.iter().copied())
        .and_then(|t| t.with_column("B", b.iter().copied()))
        .expect("equal-length columns")
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let by_number: LogLevel = level.as_number().to_string().parse().unwrap();
        prop_assert_eq!(level, by_number);
    }

    #[test]
    fn test_log_level_case_insensitive(level in any_level()) {
        let lower = level.to_str().to_lowercase();
        prop_assert_eq!(lower.parse::<LogLevel>(), Ok(level));
    }

    #[test]
    fn test_log_level_invalid_parse(invalid_str in "[^0-9CDEFINOTWcdefinotw]+") {
        prop_assert!(invalid_str.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Counting and gating
// ============================================================================

proptest! {
    #[test]
    fn test_counters_match_enabled_emissions(
        min_level in any_level(),
        calls in prop::collection::vec(any_level(), 0..40)
    ) {
        let logger = Logger::builder().min_level(min_level).build();
        for level in &calls {
            logger.log(*level, "message");
        }

        let expected_errors = calls
            .iter()
            .filter(|l| **l == LogLevel::Error && **l >= min_level)
            .count() as u64;
        let expected_warnings = calls
            .iter()
            .filter(|l| **l == LogLevel::Warning && **l >= min_level)
            .count() as u64;

        prop_assert_eq!(logger.error_count(), expected_errors);
        prop_assert_eq!(logger.warning_count(), expected_warnings);
    }

    #[test]
    fn test_disabled_levels_write_nothing(
        min_level in any_level(),
        calls in prop::collection::vec(any_level(), 0..40)
    ) {
        let written = Arc::new(Mutex::new(0usize));
        let logger = Logger::builder()
            .min_level(min_level)
            .appender(CountingAppender(Arc::clone(&written)))
            .build();

        for level in &calls {
            logger.log(*level, "message");
        }

        let enabled = calls.iter().filter(|l| **l >= min_level).count();
        prop_assert_eq!(*written.lock(), enabled);
        prop_assert_eq!(logger.total_logged(), enabled as u64);
    }

    #[test]
    fn test_invalid_input_counts_one_error(level in any_level(), text in "[a-z ]{0,20}") {
        let logger = Logger::builder().min_level(LogLevel::Debug).build();
        let result = logger.log_table(text.as_str(), 10, "", level);

        prop_assert!(result.is_err());
        prop_assert_eq!(logger.error_count(), 1);
        prop_assert_eq!(logger.warning_count(), 0);
    }
}

// ============================================================================
// Row selection
// ============================================================================

proptest! {
    #[test]
    fn test_duplicates_are_exactly_repeated_keys((a, b) in small_table()) {
        let table = build_table(&a, &b);
        let view = table.duplicated_rows(None).unwrap();

        let expected: Vec<usize> = (0..a.len())
            .filter(|&i| (0..a.len()).any(|j| j != i && a[i] == a[j] && b[i] == b[j]))
            .collect();
        prop_assert_eq!(view.row_labels(), expected.as_slice());
    }

    #[test]
    fn test_duplicates_on_subset((a, b) in small_table()) {
        let table = build_table(&a, &b);
        let view = table.duplicated_rows(Some(&["B"])).unwrap();

        let expected: Vec<usize> = (0..b.len())
            .filter(|&i| (0..b.len()).any(|j| j != i && b[i] == b[j]))
            .collect();
        prop_assert_eq!(view.row_labels(), expected.as_slice());
    }

    #[test]
    fn test_null_rows_are_exactly_missing_values((a, b) in small_table()) {
        let table = build_table(&a, &b);
        let expected: Vec<usize> = (0..a.len()).filter(|&i| a[i].is_none()).collect();
        let view = table.null_rows();
        prop_assert_eq!(view.row_labels(), expected.as_slice());
    }

    #[test]
    fn test_rendered_grid_is_rectangular((a, b) in small_table()) {
        prop_assume!(!a.is_empty());
        let table = build_table(&a, &b);
        let rendered = table.all_rows().to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        prop_assert_eq!(lines.len(), a.len() + 1);
        let width = lines[0].chars().count();
        prop_assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_head_tail_bounds((a, b) in small_table(), n in 0usize..15) {
        let table = build_table(&a, &b);
        let head = table.head(n);
        let tail = table.tail(n);

        prop_assert_eq!(head.len(), n.min(a.len()));
        prop_assert_eq!(tail.len(), n.min(a.len()));
        if let Some(last) = tail.row_labels().last() {
            prop_assert_eq!(*last, a.len() - 1);
        }
    }
}
