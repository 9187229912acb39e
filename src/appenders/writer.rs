//! Generic `io::Write` appender

use crate::core::{Appender, Result};
use std::io::Write;

/// Writes lines to any [`Write`] implementation, flushing after each one.
///
/// # Example
///
/// ```
/// use rust_color_logger::appenders::WriterAppender;
/// use rust_color_logger::Appender;
///
/// let mut appender = WriterAppender::new(Vec::new());
/// appender.append("hello").unwrap();
/// assert_eq!(appender.into_inner(), b"hello\n");
/// ```
pub struct WriterAppender<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for WriterAppender<W> {
    fn append(&mut self, line: &str) -> Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.writer.write_all(buf.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
