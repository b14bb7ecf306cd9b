//! JSON Emitter
//!
//! Streams records as one JSON array, one record per line:
//!
//! ```text
//! [
//! {"filename":"f","line":1,"char_index":0,"text":"// hello"},
//! {"filename":"f","line":2,"char_index":9,"text":"/* world\n*/"}
//! ]
//! ```
//!
//! No records gives `[]`.

use std::io::{self, Write};

use crate::record::CommentRecord;

use super::{escape_json, CommentEmitter};

/// JSON array emitter.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    /// Reused per-record buffer so each record is a single write.
    scratch: Vec<u8>,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            scratch: Vec::with_capacity(256),
        }
    }

    /// Consume the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CommentEmitter for JsonEmitter<W> {
    fn begin(&mut self) -> io::Result<()> {
        self.writer.write_all(b"[")
    }

    fn emit(&mut self, record: &CommentRecord<'_>) -> io::Result<()> {
        let out = &mut self.scratch;
        out.clear();
        let separator: &[u8] = if self.first { b"\n" } else { b",\n" };
        out.extend_from_slice(separator);
        self.first = false;

        // Build JSON manually: text is raw bytes, not necessarily UTF-8.
        out.push(b'{');
        if let Some(filename) = record.filename {
            out.extend_from_slice(b"\"filename\":\"");
            escape_json(filename.as_bytes(), out);
            out.extend_from_slice(b"\",");
        }
        write!(
            out,
            "\"line\":{},\"char_index\":{},\"text\":\"",
            record.line, record.char_index
        )?;
        escape_json(record.text, out);
        out.extend_from_slice(b"\"}");

        self.writer.write_all(out)
    }

    fn end(&mut self) -> io::Result<()> {
        if self.first {
            self.writer.write_all(b"]\n")
        } else {
            self.writer.write_all(b"\n]\n")
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
