//! Log record structure

use super::call_site::LOCATION_WIDTH;
use super::severity::{Severity, LABEL_WIDTH};
use serde::Serialize;

/// One line's worth of resolved fields. Built per call and dropped once
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: String,
    /// `None` leaves the location column out entirely; an empty string keeps
    /// the column but blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl LogRecord {
    /// Sanitize log message so a single call can only produce a single line
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(severity: Severity, message: &str, timestamp: String) -> Self {
        Self {
            severity,
            message: Self::sanitize_message(message),
            timestamp,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Join the fields with `separator`, without color.
    pub fn render(&self, separator: &str) -> String {
        let sep = separator;
        match &self.location {
            None => format!(
                "{}{sep}{:<label$.label$}{sep}{}",
                self.timestamp,
                self.severity.label(),
                self.message,
                label = LABEL_WIDTH,
            ),
            Some(location) => format!(
                "{}{sep}{:<label$.label$}{sep}{:<loc$}{sep}{}",
                self.timestamp,
                self.severity.label(),
                location,
                self.message,
                label = LABEL_WIDTH,
                loc = LOCATION_WIDTH,
            ),
        }
    }

    /// Render and wrap in the severity's color escape.
    pub fn render_colored(&self, separator: &str) -> String {
        self.severity.paint(&self.render(separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2025-01-08 15:30:45";

    #[test]
    fn test_render_without_location() {
        let record = LogRecord::new(Severity::Info, "user alice logged in", TS.to_string());
        assert_eq!(
            record.render(" | "),
            "2025-01-08 15:30:45 | Info    | user alice logged in"
        );
    }

    #[test]
    fn test_render_with_location() {
        let record = LogRecord::new(Severity::Error, "failed: 42", TS.to_string())
            .with_location("server.rs:17");
        assert_eq!(
            record.render(" | "),
            "2025-01-08 15:30:45 | Err     | server.rs:17    | failed: 42"
        );
    }

    #[test]
    fn test_long_location_not_truncated() {
        let record = LogRecord::new(Severity::Notice, "m", TS.to_string())
            .with_location("a_very_long_module_name.rs:1234");
        assert!(record
            .render("|")
            .contains("|a_very_long_module_name.rs:1234|m"));
    }

    #[test]
    fn test_blank_location_keeps_column() {
        let record =
            LogRecord::new(Severity::Debug, "m", TS.to_string()).with_location(String::new());
        assert_eq!(
            record.render(" | "),
            format!("{} | Debug   | {} | m", TS, " ".repeat(15))
        );
    }

    #[test]
    fn test_custom_separator_everywhere() {
        let record = LogRecord::new(Severity::Success, "done", TS.to_string());
        assert_eq!(record.render(" :: "), "2025-01-08 15:30:45 :: Success :: done");
    }

    #[test]
    fn test_newlines_escaped() {
        let record = LogRecord::new(Severity::Warning, "a\nb\r\tc", TS.to_string());
        assert_eq!(record.message, "a\\nb\\r\\tc");
        assert_eq!(record.render(" | ").lines().count(), 1);
    }

    #[test]
    fn test_render_colored() {
        let record = LogRecord::new(Severity::Info, "hi", TS.to_string());
        assert_eq!(
            record.render_colored(" | "),
            "\x1b[1;35m2025-01-08 15:30:45 | Info    | hi\x1b[0m"
        );
    }
}
