//! Write a fixed greeting line to a caller-supplied output sink.
//!
//! The output destination is injected as a [`output::LineSink`] rather than
//! hard-coded to the console, so callers can direct the greeting at stdout,
//! a file, or an in-memory buffer, and tests never have to capture real
//! process output.

pub mod errors;
pub mod greeter;
pub mod output;
