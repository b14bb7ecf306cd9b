//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It only distinguishes
//! what matters for comment extraction: comments, quoted literals (so that
//! comment openers inside them are ignored), newlines, and everything else.
//!
//! # Token priority
//!
//! At each position the longest of these wins, in order:
//!
//! 1. `/* ... */` block comment (closed by the first `*/`)
//! 2. `// ...` line comment (up to, not including, `\n` or EOF)
//! 3. `"..."` string, backslash escapes any byte except `\n`
//! 4. `'...'` literal, same rule
//! 5. lone `/*`: [`RawTag::UnterminatedComment`]
//! 6. lone `"` or `'`: [`RawTag::UnterminatedString`] / [`RawTag::UnterminatedChar`]
//! 7. `\n`
//! 8. anything else, merged into runs of [`RawTag::Text`]
//!
//! Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
//! The tokens always partition the input: scanning may continue after an
//! unterminated token, and the lengths of all tokens sum to the source length.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        match self.cursor.current() {
            b'/' => self.slash(start),
            b'"' => self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString),
            b'\'' => self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar),
            b'\n' => self.newline(start),
            _ => self.text(start),
        }
    }

    /// Consume the rest of the input without classifying it.
    ///
    /// Returns the number of bytes skipped. The next token is `Eof`.
    pub fn skip_rest(&mut self) -> u32 {
        self.cursor.eat_to_eof()
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '/'
        let tag = match self.cursor.current() {
            b'*' => {
                self.cursor.advance(); // consume '*'
                // On failure the cursor stays right after `/*`.
                if self.cursor.eat_through_block_close() {
                    RawTag::BlockComment
                } else {
                    RawTag::UnterminatedComment
                }
            }
            b'/' => {
                self.cursor.advance(); // consume second '/'
                self.cursor.eat_until_newline_or_eof();
                RawTag::LineComment
            }
            // Division operator or similar: plain text.
            _ => RawTag::Text,
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Literals ──────────────────────────────────────────────────

    /// Scan a literal delimited by `quote`.
    ///
    /// A backslash escapes the following byte unless that byte is `\n` or
    /// EOF. A raw newline or EOF before the closing quote makes the opening
    /// quote a lone, unterminated token of length 1.
    fn quoted(&mut self, start: u32, quote: u8, ok: RawTag, unterminated: RawTag) -> RawToken {
        let mark = self.cursor;
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_quote_delim(quote) {
                b if b == quote => {
                    self.cursor.advance(); // consume closing quote
                    return RawToken {
                        tag: ok,
                        len: self.cursor.pos() - start,
                    };
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if self.cursor.is_eof() || self.cursor.current() == b'\n' {
                        break;
                    }
                    self.cursor.advance(); // skip escaped byte
                }
                // '\n' or EOF
                _ => break,
            }
        }

        self.cursor = mark;
        self.cursor.advance();
        RawToken {
            tag: unterminated,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Trivia ────────────────────────────────────────────────────

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag: RawTag::Newline,
            len: self.cursor.pos() - start,
        }
    }

    fn text(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // current byte opens nothing
        self.cursor.skip_to_token_start();
        RawToken {
            tag: RawTag::Text,
            len: self.cursor.pos() - start,
        }
    }
}

#[cfg(test)]
mod tests;
