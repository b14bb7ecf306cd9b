//! Line and codepoint position within the input being scanned.

use cmtx_lexer_core::utf8;

/// Current scan position.
///
/// `line` is 1-based. `char_index` counts codepoints from the start of the
/// input (or from the caller-supplied origin in range mode), newlines
/// included. It is never reset at line breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanPosition {
    pub line: u64,
    pub char_index: u64,
}

impl ScanPosition {
    /// Where every file starts in a full scan.
    pub const START: ScanPosition = ScanPosition {
        line: 1,
        char_index: 0,
    };

    pub fn new(line: u64, char_index: u64) -> Self {
        ScanPosition { line, char_index }
    }

    /// Step over a token that contributes codepoints but whose newlines
    /// (if any) are accounted for separately.
    #[inline]
    pub fn advance_text(&mut self, text: &[u8]) {
        self.char_index += utf8::count_codepoints(text);
    }

    /// Step over one `\n`.
    #[inline]
    pub fn newline(&mut self) {
        self.line += 1;
        self.char_index += 1;
    }

    /// Credit the newlines inside an already-emitted comment to the line
    /// counter. The record keeps its starting line; later records see the
    /// corrected count.
    #[inline]
    pub fn absorb_newlines(&mut self, text: &[u8]) {
        self.line += utf8::count_newlines(text);
    }
}

impl Default for ScanPosition {
    fn default() -> Self {
        ScanPosition::START
    }
}
