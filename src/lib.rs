//! # Rust Color Logger
//!
//! A small colored console logger. Every call produces one line made of a
//! timestamp, a severity label, optionally the caller's `file:line`, and the
//! message, wrapped in the severity's ANSI color and written to stdout.
//!
//! ## Features
//!
//! - **Six severities**: `Err`, `Warn`, `Debug`, `Info`, `Notice`, `Success`
//! - **Localized timestamps**: predefined layouts for nine locales, custom
//!   strftime patterns, milli/micro/nanosecond precision
//! - **Call-site capture**: `file:line` resolved by the compiler, not by
//!   walking the stack
//! - **Never fails**: logging cannot return an error or panic into the caller
//! - **Thread safe**: frozen configuration and one lock per written line
//!
//! ```
//! use rust_color_logger::prelude::*;
//! use rust_color_logger::info;
//!
//! let logger = Logger::builder()
//!     .language("en")
//!     .time_precision(TimePrecision::Milli)
//!     .enable_file_name_logging()
//!     .build();
//!
//! info!(logger, "user {} logged in", "alice");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, CallSite, Clock, Locale, LogRecord, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Result, Severity, TimePrecision, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, MemoryAppender, WriterAppender};
pub use core::{
    global_logger, set_global_logger, Appender, CallSite, Clock, Locale, LogRecord, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, LoggerSettings, Result, Severity,
    TimePrecision, TimestampFormat, DEFAULT_PATTERN, DEFAULT_SEPARATOR, FORMAT_ERROR_MARKER,
};
