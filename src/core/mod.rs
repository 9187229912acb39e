//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod config;
pub mod error;
pub mod global;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod timestamp;

pub use appender::Appender;
pub use call_site::CallSite;
pub use config::{LoggerConfig, LoggerSettings, DEFAULT_SEPARATOR};
pub use error::{LoggerError, Result};
pub use global::{global_logger, set_global_logger};
pub use log_record::LogRecord;
pub use logger::{Clock, Logger, LoggerBuilder, FORMAT_ERROR_MARKER};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use timestamp::{Locale, TimePrecision, TimestampFormat, DEFAULT_PATTERN};
