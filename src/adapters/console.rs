//! Console status sink.
//!
//! Writes each status line to stdout.  Logging goes to stderr through
//! the `log` facade, so the two streams never interleave inside a line.

use std::io::Write;

use log::warn;

use crate::app::ports::StatusSink;

/// Adapter that prints every status line to the console.
#[derive(Clone, Copy, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl StatusSink for ConsoleOutput {
    fn output_line(&self, line: &str) {
        write_line(&mut std::io::stdout().lock(), line);
    }
}

/// Write one line; a failed write is logged and the line dropped.
fn write_line(out: &mut impl Write, line: &str) -> bool {
    match writeln!(out, "{line}") {
        Ok(()) => true,
        Err(e) => {
            warn!("console output failed ({}), dropped: {}", e, line);
            false
        }
    }
}
