//! Appender trait for log output destinations

use super::error::Result;

/// A destination that accepts fully rendered lines.
///
/// `line` carries no trailing newline; the appender adds it. The logger
/// calls `append` under its own lock, so one call is one uninterrupted line.
pub trait Appender: Send {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
