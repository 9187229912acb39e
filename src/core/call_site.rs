//! Source location of a log call

use serde::Serialize;
use std::fmt;
use std::panic::Location;

/// Width the `file:line` column is padded to. Longer values are kept whole.
pub const LOCATION_WIDTH: usize = 15;

/// Where a log call was made.
///
/// Captured by the compiler at the user's call site, either through
/// `#[track_caller]` on the logger's entry points or `file!()`/`line!()` in
/// the macros, so it stays correct however deep the rendering path goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Final path segment of the file, for both `/` and `\` separated paths.
    pub fn basename(&self) -> &'static str {
        self.file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }

    /// `basename:line`, or `None` when the file name is empty.
    pub fn resolve(&self) -> Option<String> {
        let name = self.basename();
        if name.is_empty() {
            return None;
        }
        Some(format!("{}:{}", name, self.line))
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.basename(), self.line)
    }
}
