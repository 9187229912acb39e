//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration could not be parsed from JSON
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A strftime pattern chrono cannot render
    #[error("Invalid time format '{pattern}'")]
    InvalidTimeFormat { pattern: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The process-wide logger was already installed
    #[error("Global logger already initialized")]
    AlreadyInitialized,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an invalid time format error
    pub fn time_format(pattern: impl Into<String>) -> Self {
        LoggerError::InvalidTimeFormat {
            pattern: pattern.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::time_format("%Y-%");
        assert!(matches!(err, LoggerError::InvalidTimeFormat { .. }));

        let err = LoggerError::config("TimePrecision", "unknown precision 'pico'");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::writer("pipe closed");
        assert!(matches!(err, LoggerError::WriterError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::time_format("%Y-%");
        assert_eq!(err.to_string(), "Invalid time format '%Y-%'");

        let err = LoggerError::config("TimePrecision", "unknown precision 'pico'");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for TimePrecision: unknown precision 'pico'"
        );

        assert_eq!(
            LoggerError::AlreadyInitialized.to_string(),
            "Global logger already initialized"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert!(err.to_string().contains("broken pipe"));
    }
}
