//! Fatal errors.
//!
//! Anything here ends the run. Unterminated comments and literals are not
//! errors in this sense: they go straight to the
//! [`Reporter`](cmtx_diagnostic::Reporter) and scanning continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid command line. Detected before any input is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("usage: cmtx LINE CHAR_INDEX FILE...")]
    MissingArguments,
    #[error("line and char_index must not be negative")]
    Negative,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("a nonzero line requires exactly one file")]
    RangeNeedsOneFile,
}

#[derive(Debug, Error)]
pub enum CmtxError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("cannot open '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot read '{label}': {source}")]
    Read { label: String, source: io::Error },

    #[error("'{label}' is too large: {len} bytes (limit {limit})")]
    TooLarge {
        label: String,
        len: usize,
        limit: usize,
    },

    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),
}

impl CmtxError {
    /// The line written to the error stream for this error.
    ///
    /// The bare usage synopsis stands alone; everything else is prefixed
    /// with the program name.
    pub fn diagnostic(&self) -> String {
        match self {
            CmtxError::Usage(UsageError::MissingArguments) => self.to_string(),
            _ => format!("cmtx: {self}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn usage_synopsis_has_no_prefix() {
        let err = CmtxError::from(UsageError::MissingArguments);
        assert_eq!(err.diagnostic(), "usage: cmtx LINE CHAR_INDEX FILE...");
    }

    #[test]
    fn usage_errors_are_prefixed() {
        assert_eq!(
            CmtxError::from(UsageError::Negative).diagnostic(),
            "cmtx: line and char_index must not be negative"
        );
        assert_eq!(
            CmtxError::from(UsageError::RangeNeedsOneFile).diagnostic(),
            "cmtx: a nonzero line requires exactly one file"
        );
        assert_eq!(
            CmtxError::from(UsageError::InvalidNumber("x1".into())).diagnostic(),
            "cmtx: invalid number 'x1'"
        );
    }

    #[test]
    fn open_error_names_file() {
        let err = CmtxError::Open {
            path: PathBuf::from("missing.c"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.diagnostic(), "cmtx: cannot open 'missing.c': not found");
    }

    #[test]
    fn too_large_names_sizes() {
        let err = CmtxError::TooLarge {
            label: "big.c".to_owned(),
            len: 5_000_000_000,
            limit: 4_294_967_295,
        };
        assert_eq!(
            err.diagnostic(),
            "cmtx: 'big.c' is too large: 5000000000 bytes (limit 4294967295)"
        );
    }

    #[test]
    fn output_error_keeps_source() {
        use std::error::Error as _;
        let err = CmtxError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "cannot write output: pipe");
    }
}
