//! Basic logger usage example
//!
//! Demonstrates console logging, level gating, the counters and panic routing.
//!
//! Run with: cargo run --example basic_usage

use redquill::prelude::*;
use redquill::{debug, error, info, warn, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== RedQuill - Basic Usage Example ===\n");

    let logger = Arc::new(initialize_logger(None, None, "INFO")?);
    let _hook = logger.install_panic_hook();

    println!("1. Logging at different levels (DEBUG is below the minimum):");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warning!(logger, "This is a warning message");
    warn!(logger, "This is another warning message");
    error!(logger, "This is an error message");

    println!("\n2. Counters:");
    logger.log_error_count();
    logger.log_warning_count();
    println!(
        "   errors = {}, warnings = {}",
        logger.error_count(),
        logger.warning_count()
    );

    println!("\n3. Raising the minimum level to ERROR hides warnings:");
    logger.set_min_level(LogLevel::Error);
    warning!(logger, "Warning message (hidden)");
    error!(logger, "Error message (visible)");

    println!("\n4. A panic in a worker thread is logged before the usual report:");
    let _ = std::thread::spawn(|| panic!("worker failed")).join();
    println!("   errors = {}", logger.error_count());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
