//! Diagnostic reporting for cmtx.
//!
//! Diagnostics are single lines on the error stream:
//!
//! ```text
//! src/main.c:12: unterminated comment
//! cmtx: cannot open 'missing.c': No such file or directory (os error 2)
//! ```
//!
//! Reporting never stops a scan. Instead the [`Reporter`] latches a
//! nonzero exit status.

mod location;
mod reporter;
mod unterminated;

pub use location::Location;
pub use reporter::{Reporter, EXIT_FAILURE, EXIT_SUCCESS};
pub use unterminated::Unterminated;
