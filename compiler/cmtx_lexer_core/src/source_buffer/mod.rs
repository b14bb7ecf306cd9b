//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! keeps every memchr search within one allocation.
//!
//! # Encoding Detection
//!
//! Sources are arbitrary bytes. Codepoint counting and the minimal JSON
//! escaping downstream are only exact for well-formed UTF-8, so the buffer
//! records where the input departs from it:
//! - Ill-formed UTF-8 sequences
//! - Interior null bytes (indistinguishable from the sentinel by value)
//!
//! Issues are recorded as [`EncodingIssue`] values. The driver logs them;
//! they never stop a scan.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer for zero-bounds-check scanning.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// A byte sequence that is not well-formed UTF-8.
    InvalidUtf8,
    /// Null byte in source content.
    InteriorNull,
}

impl EncodingIssueKind {
    /// Short human-readable description, used in log output.
    pub fn describe(self) -> &'static str {
        match self {
            EncodingIssueKind::InvalidUtf8 => "invalid UTF-8 sequence",
            EncodingIssueKind::InteriorNull => "interior null byte",
        }
    }
}

impl SourceBuffer {
    /// Longest source that can be scanned without truncation.
    pub const MAX_LEN: usize = u32::MAX as usize;

    /// Create a new sentinel-terminated buffer from raw source bytes.
    ///
    /// # File Size
    ///
    /// Scanner positions are `u32`. Sources longer than [`Self::MAX_LEN`]
    /// are truncated to it, so callers that must not lose content check
    /// the length first.
    pub fn new(source: &[u8]) -> Self {
        let source_len_u32 = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let source = &source[..source_len_u32 as usize];
        let source_len = source.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        let mut encoding_issues = Vec::new();
        detect_invalid_utf8(source, &mut encoding_issues);
        detect_interior_nulls(source, &mut encoding_issues);
        encoding_issues.sort_by_key(|issue| issue.pos);

        Self {
            buf,
            source_len: source_len_u32,
            encoding_issues,
        }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction, ordered by position.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Record every ill-formed UTF-8 sequence in `source`.
fn detect_invalid_utf8(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while offset < source.len() {
        let Err(err) = std::str::from_utf8(&source[offset..]) else {
            return;
        };
        let start = offset + err.valid_up_to();
        // `None` means the input ends in the middle of a sequence.
        let len = err.error_len().unwrap_or(source.len() - start);
        if let (Ok(pos), Ok(len32)) = (u32::try_from(start), u32::try_from(len)) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InvalidUtf8,
                pos,
                len: len32,
            });
        }
        offset = start + len;
    }
}

/// Detect null bytes within the source content.
///
/// Uses `memchr` for SIMD-accelerated null byte search instead of
/// byte-at-a-time iteration.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}
