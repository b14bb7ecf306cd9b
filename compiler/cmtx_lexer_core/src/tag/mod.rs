//! Raw token tags produced by [`RawScanner`](crate::RawScanner).
//!
//! Discriminants are grouped into semantic ranges so that
//! [`RawTag::is_unterminated`] is a single range check:
//!
//! | Range   | Group     |
//! |---------|-----------|
//! | 0-15    | comments  |
//! | 16-31   | literals  |
//! | 32-47   | trivia    |
//! | 240-254 | errors    |
//! | 255     | control   |

/// Kind of a raw token.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Comments ===
    /// `/* ... */`, possibly spanning lines.
    BlockComment = 0,
    /// `// ...` up to (not including) the newline.
    LineComment = 1,

    // === Literals ===
    /// `"..."` on a single line.
    String = 16,
    /// `'...'` on a single line. May hold any number of characters.
    Char = 17,

    // === Trivia ===
    /// A single `\n` byte.
    Newline = 32,
    /// A run of bytes that cannot start a comment, literal or newline.
    Text = 33,

    // === Errors ===
    /// `/*` with no closing `*/` before EOF. Length is always 2.
    UnterminatedComment = 240,
    /// `"` that does not begin a well-formed string. Length is always 1.
    UnterminatedString = 241,
    /// `'` that does not begin a well-formed literal. Length is always 1.
    UnterminatedChar = 242,

    // === Control ===
    /// End of input. Length is always 0.
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for tokens that end classification of the current input.
    #[inline]
    pub fn is_unterminated(self) -> bool {
        matches!(self as u8, 240..=254)
    }
}

/// A `(tag, len)` pair. The token's text is the `len` bytes that follow
/// the end of the previous token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

/// Tag (1) + padding (3) + len (4) => 8 bytes.
const _: () = assert!(std::mem::size_of::<RawToken>() <= 8);

#[cfg(test)]
mod tests;
