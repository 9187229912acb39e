//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines from many threads never interleave
//! - Nothing is lost under concurrent load
//! - A shared logger keeps one frozen configuration

use rust_color_logger::prelude::*;
use rust_color_logger::{info, success};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 250;

fn shared_logger(memory: &MemoryAppender) -> Arc<Logger> {
    Arc::new(
        Logger::builder()
            .appender(memory.clone())
            .separator(" | ")
            .enable_file_name_logging()
            .build(),
    )
}

/// Every line written concurrently must come out whole
#[test]
fn test_concurrent_lines_do_not_interleave() {
    let memory = MemoryAppender::new();
    let logger = shared_logger(&memory);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    info!(logger, "thread {} line {} {}", t, i, "x".repeat(64));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = memory.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with("\x1b[1;35m"), "broken prefix: {:?}", line);
        assert!(line.ends_with("\x1b[0m"), "broken suffix: {:?}", line);
        assert_eq!(line.matches("\x1b[0m").count(), 1, "merged lines: {:?}", line);

        let body = line
            .rsplit(" | ")
            .next()
            .and_then(|msg| msg.strip_suffix("\x1b[0m"))
            .expect("message field");
        assert!(seen.insert(body.split(' ').take(4).collect::<Vec<_>>().join(" ")));
    }

    assert_eq!(logger.metrics().lines_written(), (THREADS * LINES_PER_THREAD) as u64);
    assert_eq!(logger.metrics().write_failures(), 0);
}

/// Mixed severities from many threads all arrive
#[test]
fn test_mixed_severities_under_load() {
    let memory = MemoryAppender::new();
    let logger = shared_logger(&memory);

    let handles: Vec<_> = Severity::ALL
        .into_iter()
        .map(|severity| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..100 {
                    logger.log(severity, format_args!("{} #{}", severity, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = memory.lines();
    for severity in Severity::ALL {
        let label = format!("| {:<7} |", severity.label());
        let count = lines.iter().filter(|l| l.contains(&label)).count();
        assert_eq!(count, 100, "missing lines for {}", severity);
    }
}

/// Rapid bursts through the console appender never fail the caller
#[test]
fn test_rapid_burst_to_stdout() {
    let logger = Logger::builder().colors(false).build();

    for burst in 0..10 {
        for i in 0..20 {
            success!(logger, "Burst {} line {}", burst, i);
        }
    }

    logger.flush().expect("Failed to flush");
    assert_eq!(logger.metrics().lines_written(), 200);
}
