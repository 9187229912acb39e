//! Logger metrics
//!
//! Log calls never report failure to the caller, so these counters are the
//! only place a degraded line shows up besides stderr.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what a logger has emitted.
///
/// # Example
///
/// ```
/// use rust_color_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines the sink accepted
    lines_written: AtomicU64,

    /// Lines the sink rejected or panicked on
    write_failures: AtomicU64,

    /// Timestamps rendered from a malformed pattern
    timestamp_failures: AtomicU64,

    /// Call sites that could not be turned into `file:line`
    unresolved_call_sites: AtomicU64,

    /// Messages whose `Display` failed or panicked
    format_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            timestamp_failures: AtomicU64::new(0),
            unresolved_call_sites: AtomicU64::new(0),
            format_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn timestamp_failures(&self) -> u64 {
        self.timestamp_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn unresolved_call_sites(&self) -> u64 {
        self.unresolved_call_sites.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_failures(&self) -> u64 {
        self.format_failures.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_timestamp_failure(&self) -> u64 {
        self.timestamp_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_unresolved_call_site(&self) -> u64 {
        self.unresolved_call_sites.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_format_failure(&self) -> u64 {
        self.format_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.timestamp_failures.store(0, Ordering::Relaxed);
        self.unresolved_call_sites.store(0, Ordering::Relaxed);
        self.format_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            write_failures: AtomicU64::new(self.write_failures()),
            timestamp_failures: AtomicU64::new(self.timestamp_failures()),
            unresolved_call_sites: AtomicU64::new(self.unresolved_call_sites()),
            format_failures: AtomicU64::new(self.format_failures()),
        }
    }
}
