//! Table preview example
//!
//! Logs head/tail previews and duplicate/missing value warnings to the
//! console and to `table_previews.log` in the system temp directory.
//!
//! Run with: cargo run --example table_previews

use redquill::prelude::*;
use redquill::{error, info};
use serde_json::json;

fn main() -> Result<()> {
    let log_dir = std::env::temp_dir();
    let logger = initialize_logger(Some(log_dir.as_path()), Some("table_previews.log"), "INFO")?;

    info!(logger, "Building the sample table.");
    let table = Table::new()
        .with_column("A", [Some(1.0), Some(2.0), None, Some(3.0)])?
        .with_column("B", [4, 2, 2, 5])?;

    logger.log_table(&table, DEFAULT_TABLE_ROWS, "Full table.", LogLevel::Info)?;
    logger.log_table_head_tail(&table, 2, "Both ends.", LogLevel::Info)?;
    logger.warn_duplicate_rows(&table, Some(&["B"]), "Duplicates on B.")?;
    logger.warn_duplicate_rows(&table, None, "No subset.")?;
    logger.warn_null_rows(&table, "Missing values.")?;

    // Loosely typed input is checked on the way in.
    let records = json!([{"city": "Oslo", "visits": 3}, {"city": "Lima", "visits": null}]);
    logger.warn_null_rows(&records, "Records with gaps.")?;
    if let Err(e) = logger.log_table(&json!("not a table"), 5, "", LogLevel::Info) {
        error!(logger, "Rejected input: {}", e);
    }

    logger.log_error_count();
    logger.log_warning_count();
    logger.shutdown()?;

    println!("log written to {}", log_dir.join("table_previews.log").display());
    Ok(())
}
