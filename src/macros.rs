//! Logging macros for ergonomic log message formatting.
//!
//! Each severity macro takes either a logger followed by `format!`-style
//! arguments, or just the arguments, in which case the process-wide logger
//! from [`global_logger`](crate::global_logger) is used. The call site is
//! taken from `file!()`/`line!()` where the macro is invoked.
//!
//! # Examples
//!
//! ```
//! use rust_color_logger::prelude::*;
//! use rust_color_logger::{info, success};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Through the global logger
//! success!("Migration {} applied", "0042");
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_color_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_at(
            $severity,
            ::std::format_args!($($arg)+),
            $crate::CallSite::new(::std::file!(), ::std::line!()),
        )
    };
}

/// Log an error message, labelled `Err`.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_color_logger::err;
/// err!(logger, "Failed to connect to database");
/// err!(logger, "failed: {}", 42);
/// ```
#[macro_export]
macro_rules! err {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global_logger(), $crate::Severity::Error, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning message.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_color_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global_logger(), $crate::Severity::Warning, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a debug message.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_color_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global_logger(), $crate::Severity::Debug, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info message.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_color_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "user {} logged in", "alice");
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global_logger(), $crate::Severity::Info, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a notice message.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_color_logger::notice;
/// notice!(logger, "Configuration reloaded");
/// notice!(logger, "{} workers online", 8);
/// ```
#[macro_export]
macro_rules! notice {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global_logger(), $crate::Severity::Notice, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log a success message.
///
/// # Examples
///
/// ```
/// # use rust_color_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_color_logger::success;
/// success!(logger, "Backup finished");
/// success!(logger, "Uploaded {} files", 12);
/// ```
#[macro_export]
macro_rules! success {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global_logger(), $crate::Severity::Success, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Success, $($arg)+)
    };
}
