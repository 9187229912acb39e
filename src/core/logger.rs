//! Main logger implementation

use super::{
    appender::Appender,
    call_site::CallSite,
    config::LoggerConfig,
    error::Result,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    severity::Severity,
    timestamp::{TimePrecision, TimestampFormat},
};
use crate::appenders::ConsoleAppender;
use chrono::{DateTime, FixedOffset, Local};
use parking_lot::Mutex;
use std::any::Any;
use std::fmt::{self, Write as _};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Source of "now" for timestamps
pub type Clock = Arc<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>;

fn local_clock() -> Clock {
    Arc::new(|| DateTime::<FixedOffset>::from(Local::now()))
}

/// Shown in place of a message whose `Display` failed
pub const FORMAT_ERROR_MARKER: &str = "<formatting error>";

/// Each kind of diagnostic is printed once per logger; repeats are only counted
fn should_alert(previous_count: u64) -> bool {
    previous_count == 0
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Formats, colors and writes log lines.
///
/// The configuration is frozen when the logger is built. Writes go through a
/// single lock, so concurrent callers never interleave inside a line.
///
/// None of the logging methods can fail. Sink errors, sink panics, failing
/// message formatters, malformed timestamp patterns and unresolvable call
/// sites are reported on stderr and counted in [`LoggerMetrics`]; the line is
/// still produced.
pub struct Logger {
    config: Arc<LoggerConfig>,
    appender: Mutex<Box<dyn Appender>>,
    clock: Clock,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// A logger with the default configuration writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    #[must_use]
    pub fn with_config(config: LoggerConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }

    #[inline]
    #[track_caller]
    pub fn err(&self, message: impl fmt::Display) {
        self.log_at(Severity::Error, message, CallSite::caller());
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log_at(Severity::Warning, message, CallSite::caller());
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_at(Severity::Debug, message, CallSite::caller());
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_at(Severity::Info, message, CallSite::caller());
    }

    #[inline]
    #[track_caller]
    pub fn notice(&self, message: impl fmt::Display) {
        self.log_at(Severity::Notice, message, CallSite::caller());
    }

    #[inline]
    #[track_caller]
    pub fn success(&self, message: impl fmt::Display) {
        self.log_at(Severity::Success, message, CallSite::caller());
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        self.log_at(severity, message, CallSite::caller());
    }

    /// Log with an explicit call site, as the macros do.
    pub fn log_at(&self, severity: Severity, message: impl fmt::Display, site: CallSite) {
        let line = self.render(severity, message, site);
        self.emit(&line);
    }

    /// Produce the exact line [`log_at`](Self::log_at) would write, colors
    /// included, without writing it.
    pub fn render(&self, severity: Severity, message: impl fmt::Display, site: CallSite) -> String {
        let record = self.record(severity, message, site);
        if self.config.colors {
            record.render_colored(&self.config.separator)
        } else {
            record.render(&self.config.separator)
        }
    }

    fn record(&self, severity: Severity, message: impl fmt::Display, site: CallSite) -> LogRecord {
        let text = self.message_text(severity, message);
        let record = LogRecord::new(severity, &text, self.timestamp());
        if !self.config.include_file_name {
            return record;
        }

        let location = site.resolve().unwrap_or_else(|| {
            if should_alert(self.metrics.record_unresolved_call_site()) {
                eprintln!(
                    "[LOGGER WARNING] Failed to get the caller information for '{}' ({:?})",
                    severity, site
                );
            }
            String::new()
        });
        record.with_location(location)
    }

    /// Render the message, substituting [`FORMAT_ERROR_MARKER`] if its
    /// `Display` returns an error or panics
    fn message_text(&self, severity: Severity, message: impl fmt::Display) -> String {
        let rendered = catch_unwind(AssertUnwindSafe(|| {
            let mut text = String::new();
            write!(text, "{}", message)?;
            Ok::<_, fmt::Error>(text)
        }));

        let reason = match rendered {
            Ok(Ok(text)) => return text,
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        if should_alert(self.metrics.record_format_failure()) {
            eprintln!(
                "[LOGGER WARNING] Failed to format the '{}' message: {}",
                severity, reason
            );
        }
        FORMAT_ERROR_MARKER.to_string()
    }

    fn timestamp(&self) -> String {
        let now = (self.clock)();
        let format = &self.config.timestamp_format;
        match format.try_format(&now) {
            Ok(timestamp) => timestamp,
            Err(e) => {
                if should_alert(self.metrics.record_timestamp_failure()) {
                    eprintln!("[LOGGER WARNING] {}. Printing the pattern instead.", e);
                }
                format.pattern().into_owned()
            }
        }
    }

    /// Hand a line to the appender with panic isolation
    fn emit(&self, line: &str) {
        let mut appender = self.appender.lock();
        let append_result = catch_unwind(AssertUnwindSafe(|| appender.append(line)));

        match append_result {
            Ok(Ok(())) => {
                self.metrics.record_written();
            }
            Ok(Err(e)) => {
                self.metrics.record_write_failure();
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
            }
            Err(panic_info) => {
                self.metrics.record_write_failure();
                let panic_msg = panic_message(panic_info.as_ref());
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}",
                    appender.name(),
                    panic_msg
                );
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("appender", &self.appender.lock().name())
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Timestamp settings apply in the order they are called: a language or a
/// custom pattern replaces what came before, precision extends it.
///
/// # Example
/// ```
/// use rust_color_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .language("en")
///     .time_precision(TimePrecision::Milli)
///     .separator(" - ")
///     .enable_file_name_logging()
///     .appender(ConsoleAppender::new())
///     .build();
///
/// logger.info(format_args!("Server listening on port {}", 8080));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appender: Option<Box<dyn Appender>>,
    clock: Option<Clock>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            appender: None,
            clock: None,
        }
    }

    /// Start from an existing configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Timestamp pattern for a locale code; unknown codes use the default
    #[must_use = "builder methods return a new value"]
    pub fn language(mut self, code: &str) -> Self {
        self.config = self.config.with_language(code);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_precision(mut self, precision: TimePrecision) -> Self {
        self.config = self.config.with_time_precision(precision);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn custom_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.config = self.config.with_custom_time_format(pattern);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config = self.config.with_timestamp_format(format);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config = self.config.with_separator(separator);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enable_file_name_logging(self) -> Self {
        self.file_name_logging(true)
    }

    #[must_use = "builder methods return a new value"]
    pub fn file_name_logging(mut self, enabled: bool) -> Self {
        self.config = self.config.with_file_name_logging(enabled);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.config = self.config.with_colors(colors);
        self
    }

    /// Set the output destination. Defaults to [`ConsoleAppender`].
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Replace the wall clock, mainly for deterministic output in tests
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let appender: Box<dyn Appender> = match self.appender {
            Some(appender) => appender,
            None => Box::new(ConsoleAppender::new()),
        };

        Logger {
            config: self.config.shared(),
            appender: Mutex::new(appender),
            clock: self.clock.unwrap_or_else(local_clock),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
