//! Basic logger usage example
//!
//! Demonstrates every severity, localized timestamps, precision, separators
//! and call-site capture.
//!
//! Run with: cargo run --example basic_usage

use rust_color_logger::prelude::*;
use rust_color_logger::{debug, err, info, notice, success, warn};

fn main() -> Result<()> {
    println!("=== Rust Color Logger - Basic Usage Example ===\n");

    println!("1. Default configuration:");
    let logger = Logger::new();
    err!(logger, "failed: {}", 42);
    warn!(logger, "Low disk space");
    debug!(logger, "Counter value: {}", 10);
    info!(logger, "user {} logged in", "alice");
    notice!(logger, "Configuration reloaded");
    success!(logger, "Backup finished");

    println!("\n2. English, millisecond precision, file names:");
    let logger = Logger::builder()
        .language("en")
        .time_precision(TimePrecision::Milli)
        .enable_file_name_logging()
        .build();
    info!(logger, "Server listening on port {}", 8080);
    logger.warn("Retrying in 5s");

    println!("\n3. Other locales:");
    for code in ["fr", "de", "zh", "ar"] {
        let logger = Logger::builder().language(code).build();
        notice!(logger, "locale {}", code);
    }

    println!("\n4. Custom pattern and separator:");
    let logger = Logger::builder()
        .custom_time_format("%H:%M:%S%.6f")
        .separator(" :: ")
        .build();
    success!(logger, "Done");

    println!("\n5. From JSON:");
    let config = LoggerConfig::from_json(r#"{ "language": "ja", "time_precision": "micro" }"#)?;
    let logger = Logger::with_config(config);
    info!(logger, "設定を読み込みました");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
