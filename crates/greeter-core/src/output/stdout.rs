use std::io::Write;

use crate::errors::Result;
use crate::output::LineSink;

/// Writes each line to the process's standard output.
///
/// Uses an explicit locked handle rather than `println!` so that stdout
/// faults (closed pipe, full disk behind a redirect) come back as errors
/// instead of a panic.
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}
