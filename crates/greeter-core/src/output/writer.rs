use std::io::Write;

use crate::errors::Result;
use crate::output::LineSink;

/// Adapts any [`std::io::Write`] value into a [`LineSink`].
///
/// Covers file handles, `Vec<u8>` buffers, and network streams alike. The
/// sink owns the writer for its lifetime; callers that need the written
/// bytes back (e.g. an in-memory buffer) recover it with
/// [`WriterSink::into_inner`].
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}
