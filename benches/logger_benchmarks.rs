//! Criterion benchmarks for redquill

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use redquill::prelude::*;

fn wide_table(rows: i64) -> Table {
    Table::from_columns([
        ("id", (0..rows).map(Cell::from).collect::<Vec<_>>()),
        ("bucket", (0..rows).map(|i| Cell::from(i % 97)).collect()),
        (
            "score",
            (0..rows)
                .map(|i| if i % 13 == 0 { Cell::Null } else { Cell::Float(i as f64 / 7.0) })
                .collect(),
        ),
    ])
    .expect("equal-length columns")
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_gated_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("gated_logging");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder().min_level(LogLevel::Error).build();

    group.bench_function("disabled_level", |b| {
        b.iter(|| logger.info(black_box("filtered out")));
    });

    group.bench_function("enabled_no_appenders", |b| {
        b.iter(|| logger.error(black_box("counted")));
    });

    group.finish();
}

// ============================================================================
// Table Benchmarks
// ============================================================================

fn bench_table_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_selection");
    let table = wide_table(10_000);
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("duplicated_rows_subset", |b| {
        b.iter(|| black_box(table.duplicated_rows(Some(&["bucket"])).expect("known column").len()));
    });

    group.bench_function("null_rows", |b| {
        b.iter(|| black_box(table.null_rows().len()));
    });

    group.finish();
}

fn bench_table_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_rendering");
    let table = wide_table(1_000);

    group.bench_function("head_10", |b| {
        b.iter(|| black_box(table.head(DEFAULT_TABLE_ROWS).to_string()));
    });

    group.bench_function("all_rows", |b| {
        b.iter(|| black_box(table.all_rows().to_string()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_gated_logging,
    bench_table_selection,
    bench_table_rendering
);
criterion_main!(benches);
