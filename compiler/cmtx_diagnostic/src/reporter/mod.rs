//! Line-oriented diagnostic reporter with a latched exit status.

use std::fmt;
use std::io::Write;

use crate::Location;

/// Process exit status when nothing was reported.
pub const EXIT_SUCCESS: i32 = 0;
/// Process exit status once any error was reported.
pub const EXIT_FAILURE: i32 = 1;

/// Writes diagnostics to a stream and remembers that it did.
///
/// Write failures on the diagnostic stream are ignored: there is nowhere
/// left to report them.
pub struct Reporter<W: Write> {
    writer: W,
    error_count: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W) -> Self {
        Reporter {
            writer,
            error_count: 0,
        }
    }

    /// Report an error at a source location: `file:line: message`.
    pub fn report(&mut self, location: Location<'_>, message: impl fmt::Display) {
        let _ = writeln!(self.writer, "{location}: {message}");
        self.error_count += 1;
    }

    /// Report an error with no source location.
    pub fn error(&mut self, message: impl fmt::Display) {
        let _ = writeln!(self.writer, "{message}");
        self.error_count += 1;
    }

    /// Exit status for the process: [`EXIT_FAILURE`] once anything was reported.
    pub fn exit_code(&self) -> i32 {
        if self.error_count == 0 {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Consume the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
