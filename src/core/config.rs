//! Logger configuration
//!
//! A [`LoggerConfig`] is assembled once, then frozen inside a
//! [`Logger`](super::Logger) behind an `Arc`. Nothing can change it while
//! lines are being written.

use super::error::Result;
use super::timestamp::{TimePrecision, TimestampFormat};
use serde::Deserialize;
use std::sync::Arc;

/// Default delimiter between line fields.
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Everything that shapes a rendered line.
///
/// # Examples
///
/// ```
/// use rust_color_logger::core::{LoggerConfig, TimePrecision};
///
/// let config = LoggerConfig::new()
///     .with_language("de")
///     .with_time_precision(TimePrecision::Milli)
///     .with_separator(" - ")
///     .with_file_name_logging(true);
///
/// assert_eq!(config.timestamp_format.pattern(), "%d.%m.%Y %H:%M:%S%.3f");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Active timestamp pattern
    pub timestamp_format: TimestampFormat,
    /// Delimiter placed between every pair of fields
    pub separator: String,
    /// Whether to include `file:line` of the call site
    pub include_file_name: bool,
    /// Whether to wrap lines in ANSI color escapes
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            include_file_name: false,
            colors: true,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the predefined pattern for a locale code (unknown codes use the default).
    #[must_use]
    pub fn with_language(mut self, code: &str) -> Self {
        self.timestamp_format.set_language(code);
        self
    }

    /// Add sub-second precision to the current pattern
    #[must_use]
    pub fn with_time_precision(mut self, precision: TimePrecision) -> Self {
        self.timestamp_format.set_precision(precision);
        self
    }

    /// Replace the timestamp pattern with an arbitrary strftime string
    #[must_use]
    pub fn with_custom_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_format.set_custom(pattern);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_file_name_logging(mut self, enabled: bool) -> Self {
        self.include_file_name = enabled;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Fields are applied in a fixed order: `language`, then
    /// `custom_time_format`, then `time_precision`.
    ///
    /// ```
    /// use rust_color_logger::core::LoggerConfig;
    ///
    /// let config = LoggerConfig::from_json(
    ///     r#"{ "language": "en", "time_precision": "milli", "include_file_name": true }"#,
    /// )
    /// .unwrap();
    ///
    /// assert!(config.include_file_name);
    /// assert_eq!(config.timestamp_format.pattern(), "%m-%d-%Y %-I:%M:%S%.3f %p");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: LoggerSettings = serde_json::from_str(json)?;
        Ok(settings.into())
    }

    /// Wrap this config in an Arc for sharing across threads
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Serialized form of a [`LoggerConfig`], suitable for embedding in a host
/// application's own configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    pub language: Option<String>,
    pub custom_time_format: Option<String>,
    pub time_precision: Option<TimePrecision>,
    pub separator: Option<String>,
    pub include_file_name: bool,
    pub colors: Option<bool>,
}

impl From<LoggerSettings> for LoggerConfig {
    fn from(settings: LoggerSettings) -> Self {
        let mut config = LoggerConfig::default();

        if let Some(language) = settings.language {
            config.timestamp_format.set_language(&language);
        }
        if let Some(pattern) = settings.custom_time_format {
            config.timestamp_format.set_custom(pattern);
        }
        if let Some(precision) = settings.time_precision {
            config.timestamp_format.set_precision(precision);
        }
        if let Some(separator) = settings.separator {
            config.separator = separator;
        }
        if let Some(colors) = settings.colors {
            config.colors = colors;
        }
        config.include_file_name = settings.include_file_name;

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;
    use crate::core::timestamp::DEFAULT_PATTERN;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.timestamp_format.pattern(), DEFAULT_PATTERN);
        assert_eq!(config.separator, " | ");
        assert!(!config.include_file_name);
        assert!(config.colors);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoggerConfig::new()
            .with_language("fr")
            .with_time_precision(TimePrecision::Micro)
            .with_separator(" :: ")
            .with_file_name_logging(true)
            .with_colors(false);

        assert_eq!(config.timestamp_format.pattern(), "%d-%m-%Y %H:%M:%S%.6f");
        assert_eq!(config.separator, " :: ");
        assert!(config.include_file_name);
        assert!(!config.colors);
    }

    #[test]
    fn test_calls_apply_in_order() {
        let custom_last = LoggerConfig::new()
            .with_language("en")
            .with_time_precision(TimePrecision::Milli)
            .with_custom_time_format("%s");
        assert_eq!(custom_last.timestamp_format.pattern(), "%s");

        let language_last = LoggerConfig::new()
            .with_custom_time_format("%s")
            .with_language("it");
        assert_eq!(language_last.timestamp_format.pattern(), "%d-%m-%Y %H:%M:%S");
    }

    #[test]
    fn test_from_json() {
        let config = LoggerConfig::from_json(
            r#"{
                "language": "ja",
                "time_precision": "nano",
                "separator": " / ",
                "colors": false
            }"#,
        )
        .expect("valid config");

        assert_eq!(config.timestamp_format.pattern(), "%Y年%m月%d日 %H:%M:%S%.9f");
        assert_eq!(config.separator, " / ");
        assert!(!config.colors);
        assert!(!config.include_file_name);
    }

    #[test]
    fn test_from_json_empty_is_default() {
        let config = LoggerConfig::from_json("{}").expect("valid config");
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = LoggerConfig::from_json(r#"{ "min_level": "info" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::ConfigParse(_)));
    }

    #[test]
    fn test_shared_config() {
        let config = LoggerConfig::new().with_separator(" ~ ").shared();
        let config2 = Arc::clone(&config);
        assert_eq!(config.separator, config2.separator);
    }
}
