//! Process-wide logger
//!
//! The format-string form of the logging macros (`info!("...")`) writes
//! through this logger. It can be installed once; after that its
//! configuration is fixed for the life of the process.

use super::error::{LoggerError, Result};
use super::logger::Logger;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if a logger was installed
/// before, or if the global logger was already used (which installs the
/// default console logger).
///
/// # Example
///
/// ```
/// use rust_color_logger::prelude::*;
/// use rust_color_logger::{info, set_global_logger};
///
/// set_global_logger(Logger::builder().language("fr").build()).unwrap();
/// info!("ready after {} ms", 12);
/// ```
pub fn set_global_logger(logger: Logger) -> Result<()> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// The process-wide logger, falling back to [`Logger::new`] on first use.
pub fn global_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_logger_installs_once() {
        let first = global_logger() as *const Logger;
        let second = global_logger() as *const Logger;
        assert_eq!(first, second);

        let err = set_global_logger(Logger::new()).unwrap_err();
        assert!(matches!(err, LoggerError::AlreadyInitialized));
    }
}
