//! Comment record emitters.
//!
//! The scanner hands every record to a [`CommentEmitter`] the moment it is
//! found:
//! - [`JsonEmitter`]: streams a JSON array to a writer (the CLI output)
//! - [`CollectingEmitter`]: keeps owned records in memory (embedding, tests)

mod json;

pub use json::JsonEmitter;

use std::io;

use crate::record::{CommentRecord, OwnedCommentRecord};

/// Sink for comment records.
///
/// Call order is always `begin`, any number of `emit`, then `end`.
pub trait CommentEmitter {
    /// Start the output (e.g. open the JSON array).
    fn begin(&mut self) -> io::Result<()>;

    /// Emit a single record.
    fn emit(&mut self, record: &CommentRecord<'_>) -> io::Result<()>;

    /// Finish the output. Must leave it well-formed regardless of how many
    /// records were emitted.
    fn end(&mut self) -> io::Result<()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
}

/// Collects records in memory.
#[derive(Debug, Default)]
pub struct CollectingEmitter {
    records: Vec<OwnedCommentRecord>,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[OwnedCommentRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<OwnedCommentRecord> {
        self.records
    }
}

impl CommentEmitter for CollectingEmitter {
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn emit(&mut self, record: &CommentRecord<'_>) -> io::Result<()> {
        self.records.push(record.to_owned_record());
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Append `bytes` to `out` as the body of a JSON string.
///
/// `"` and `\` get backslash escapes, as do backspace, form feed, newline,
/// carriage return and tab. Every other byte is copied as-is, so
/// multi-byte UTF-8 passes through untouched, with one deliberate
/// departure from that minimal rule: the remaining C0 control bytes
/// become `\u00XX`, since JSON strings cannot hold them raw. The result
/// is valid JSON only when `bytes` is well-formed UTF-8.
pub fn escape_json(bytes: &[u8], out: &mut Vec<u8>) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.reserve(bytes.len());
    for &b in bytes {
        match b {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x00..=0x1F => {
                out.extend_from_slice(b"\\u00");
                out.push(HEX[usize::from(b >> 4)]);
                out.push(HEX[usize::from(b & 0x0F)]);
            }
            _ => out.push(b),
        }
    }
}
