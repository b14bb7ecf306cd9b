//! Low-level scanner for C-family comments.
//!
//! Splits a byte buffer into `(RawTag, len)` pairs: block comments, line
//! comments, quoted literals, newlines and runs of plain text. Nothing
//! here knows about files, positions or output; the `cmtx` crate drives
//! the scanner and turns tokens into comment records.
//!
//! ```text
//! SourceBuffer ──► Cursor ──► RawScanner ──► RawToken { tag, len }
//! ```
//!
//! Input is treated as bytes. Codepoint arithmetic in [`utf8`] assumes
//! well-formed UTF-8; ill-formed input is still scanned and reported via
//! [`SourceBuffer::encoding_issues`].

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;
pub mod utf8;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
