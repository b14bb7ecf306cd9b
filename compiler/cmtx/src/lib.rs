//! Extract C-family comments as JSON.
//!
//! Scans source files for `/* block */` and `// line` comments, skipping
//! anything inside `"string"` or `'char'` literals, and streams one record
//! per comment:
//!
//! ```text
//! {"filename":"f","line":2,"char_index":9,"text":"/* world\n*/"}
//! ```
//!
//! `line` is 1-based and `char_index` counts Unicode codepoints from the
//! start of the input. Unterminated comments and literals are reported on
//! the error stream and end the scan of that input only.
//!
//! # Architecture
//!
//! ```text
//! cli ─► invocation ─► ScanContext ─► FileQueue ─► SourceBuffer
//!                          │
//!                          ├─► RawScanner (cmtx_lexer_core)
//!                          ├─► CommentEmitter (JsonEmitter / CollectingEmitter)
//!                          └─► Reporter (cmtx_diagnostic)
//! ```

pub mod cli;
pub mod emitter;
pub mod error;
pub mod file_queue;
pub mod invocation;
pub mod position;
pub mod record;
pub mod scanner;
mod tracing_setup;

pub use emitter::{CollectingEmitter, CommentEmitter, JsonEmitter};
pub use error::{CmtxError, UsageError};
pub use file_queue::{FileQueue, Input, Source};
pub use invocation::{parse_args, Command, ScanConfig, ScanMode};
pub use position::ScanPosition;
pub use record::{CommentRecord, OwnedCommentRecord};
pub use scanner::{ScanContext, ScanEvent, ScanState, ScanSummary};
pub use tracing_setup::init_tracing;
