//! In-memory appender

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects rendered lines in memory.
///
/// Clones share the same buffer: keep one clone, hand the other to the
/// logger, and read back what was written.
///
/// # Example
///
/// ```
/// use rust_color_logger::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let logger = Logger::builder()
///     .appender(memory.clone())
///     .colors(false)
///     .build();
///
/// logger.success("deployed");
/// assert!(memory.lines()[0].ends_with("| Success | deployed"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Remove and return everything written so far
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let memory = MemoryAppender::new();
        let mut handle = memory.clone();

        handle.append("one").unwrap();
        handle.append("two").unwrap();

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.lines(), vec!["one", "two"]);
    }

    #[test]
    fn test_take_drains() {
        let mut memory = MemoryAppender::new();
        memory.append("line").unwrap();

        assert_eq!(memory.take(), vec!["line"]);
        assert!(memory.is_empty());
    }
}
