//! Constructs that can be left open at end of line or input.

use std::fmt;

/// A comment or literal whose closing delimiter never arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unterminated {
    /// `/*` without `*/`.
    Comment,
    /// `"` without a matching `"` on the same line.
    DoubleQuote,
    /// `'` without a matching `'` on the same line.
    SingleQuote,
}

impl Unterminated {
    /// Diagnostic message, e.g. `unterminated comment`.
    pub fn message(self) -> &'static str {
        match self {
            Unterminated::Comment => "unterminated comment",
            Unterminated::DoubleQuote => "unterminated double-quote string",
            Unterminated::SingleQuote => "unterminated single-quote string",
        }
    }
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
