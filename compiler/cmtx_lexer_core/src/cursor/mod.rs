//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached or exceeded the source length.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes, the cursor distinguishes
//! them from EOF by comparing `pos` against `source_len`. A null at
//! `pos < source_len` is ordinary content; a null at `pos >= source_len`
//! is the sentinel (EOF). The memchr-based skipping methods search only
//! within `..source_len`, so they never confuse the two.

/// Returns the earliest (minimum) of two optional positions.
///
/// Used to combine results from separate memchr calls when we need to
/// search for more bytes than `memchr3` supports (which handles at most
/// 3 needles).
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking
/// when a literal or comment turns out to be unterminated.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00`. This is guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF (the sentinel byte). Interior null bytes also
    /// return `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Extract the source bytes in `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Source content from the current position to EOF.
    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used by the line comment scanner to skip comment bodies. The newline
    /// itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        if let Some(offset) = memchr::memchr(b'\n', self.remaining()) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past the first `*/` at or after the current position.
    ///
    /// Returns `false` and leaves the cursor untouched when no closing
    /// sequence exists before EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_through_block_close(&mut self) -> bool {
        match memchr::memmem::find(self.remaining(), b"*/") {
            Some(offset) => {
                self.pos += offset as u32 + 2;
                true
            }
            None => false,
        }
    }

    /// Advance past ordinary quoted-literal content to the next interesting
    /// byte. Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes: the closing `quote`, `\`, and `\n`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_quote_delim(&mut self, quote: u8) -> u8 {
        if let Some(off) = memchr::memchr3(quote, b'\\', b'\n', self.remaining()) {
            self.pos += off as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance past plain code text to the next byte that may start a
    /// token of its own: `/`, `"`, `'` or `\n`.
    ///
    /// Uses memchr3 for the three token openers with a secondary search
    /// for `\n`. Stops at EOF if none is found.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_token_start(&mut self) {
        let remaining = self.remaining();
        let primary = memchr::memchr3(b'/', b'"', b'\'', remaining);
        let newline = memchr::memchr(b'\n', remaining);

        match earliest_of(primary, newline) {
            Some(off) => self.pos += off as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Move to EOF, returning the number of bytes skipped.
    pub fn eat_to_eof(&mut self) -> u32 {
        let skipped = self.source_len.saturating_sub(self.pos);
        self.pos = self.pos.max(self.source_len);
        skipped
    }
}
