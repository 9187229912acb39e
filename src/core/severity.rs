//! Severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width the label column is padded (or truncated) to.
pub const LABEL_WIDTH: usize = 7;

/// The six severities a line can be tagged with.
///
/// There is no ordering between them: every severity is always emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Debug,
    Info,
    Notice,
    Success,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Error,
        Severity::Warning,
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Success,
    ];

    /// Label printed in the second column.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Err",
            Severity::Warning => "Warn",
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Notice => "Notice",
            Severity::Success => "Success",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Error => Red,
            Severity::Warning => Yellow,
            Severity::Debug => Blue,
            Severity::Info => Magenta,
            Severity::Notice => Cyan,
            Severity::Success => Green,
        }
    }

    /// Wrap `line` in this severity's bold foreground escape sequence.
    ///
    /// The escape is always emitted, regardless of whether stdout is a
    /// terminal; callers that want plain text disable colors on the logger.
    pub fn paint(&self, line: &str) -> String {
        // Built by hand so per-logger colors don't depend on `colored`'s
        // global tty and env overrides.
        format!("\x1b[1;{}m{}\x1b[0m", self.color_code().to_fg_str(), line)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "err" | "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warning),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "notice" => Ok(Severity::Notice),
            "success" => Ok(Severity::Success),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
