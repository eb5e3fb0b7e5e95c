use crate::errors::Result;
use crate::output::LineSink;

/// The text written by [`Greeter::print`].
pub const GREETING: &str = "Hello World";

/// Writes a fixed greeting line to an injected output sink.
///
/// Stateless: every call writes the same line, and two calls on the same
/// sink append two identical lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    /// Write `Hello World` plus a newline to `sink`, exactly once.
    ///
    /// Sink faults propagate to the caller unchanged; this method does no
    /// retrying, wrapping, or logging of failures.
    pub fn print(&self, sink: &mut dyn LineSink) -> Result<()> {
        sink.write_line(GREETING)?;
        tracing::trace!(len = GREETING.len(), "greeting written");
        Ok(())
    }
}
