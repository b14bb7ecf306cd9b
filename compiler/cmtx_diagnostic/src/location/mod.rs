//! Source locations for scan diagnostics.

use std::fmt;

/// Where a diagnostic points: an optional file label and a 1-based line.
///
/// Displays as `file:line`. Without a label the file part is empty,
/// giving `:line`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location<'a> {
    pub file: Option<&'a str>,
    pub line: u64,
}

impl<'a> Location<'a> {
    pub fn new(file: Option<&'a str>, line: u64) -> Self {
        Location { file, line }
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.unwrap_or(""), self.line)
    }
}
