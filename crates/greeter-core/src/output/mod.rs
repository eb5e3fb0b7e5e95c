pub mod stdout;
pub mod writer;

use crate::errors::Result;

/// A destination that accepts one line of text per call.
///
/// Implementations append `line` followed by a newline, exactly once per
/// call, and surface their own I/O faults through the `Result` unchanged.
pub trait LineSink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
}
