//! Ordered queue of inputs.
//!
//! Inputs are opened one at a time, front to back, and read completely
//! into a [`SourceBuffer`] before scanning starts. The OS handle lives
//! only inside [`FileQueue::advance`], so it is closed before the next
//! input is touched and on every error path.
//!
//! Inputs longer than [`SourceBuffer::MAX_LEN`] are fatal rather than
//! scanned in part.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use cmtx_lexer_core::SourceBuffer;
use tracing::debug;

use crate::error::CmtxError;
use crate::invocation::{ScanConfig, ScanMode};

/// Something to scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// A file on disk, labeled with its name as given.
    File(String),
    /// Standard input, reported under `label`.
    Stdin { label: String },
    /// In-memory bytes with an optional label.
    Bytes { label: Option<String>, bytes: Vec<u8> },
}

impl Input {
    /// Label used in records and diagnostics.
    pub fn label(&self) -> Option<&str> {
        match self {
            Input::File(name) => Some(name),
            Input::Stdin { label } => Some(label),
            Input::Bytes { label, .. } => label.as_deref(),
        }
    }
}

/// A fully read input, ready to scan.
#[derive(Debug)]
pub struct Source {
    label: Option<String>,
    buffer: SourceBuffer,
}

impl Source {
    pub fn new(label: Option<String>, bytes: &[u8]) -> Result<Self, CmtxError> {
        check_len(label.as_deref(), bytes.len())?;
        Ok(Source {
            label,
            buffer: SourceBuffer::new(bytes),
        })
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }
}

/// Inputs still waiting to be scanned.
#[derive(Debug, Default)]
pub struct FileQueue {
    pending: VecDeque<Input>,
}

impl FileQueue {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        FileQueue {
            pending: inputs.into_iter().collect(),
        }
    }

    /// Queue for a parsed command line: the named files in a full scan,
    /// or labeled standard input in a range scan.
    pub fn from_config(config: &ScanConfig) -> Self {
        match config.mode {
            ScanMode::Full => Self::new(config.files.iter().cloned().map(Input::File)),
            ScanMode::Range { .. } => Self::new(
                config
                    .files
                    .iter()
                    .map(|label| Input::Stdin { label: label.clone() }),
            ),
        }
    }

    /// Open and read the next input.
    ///
    /// Returns `Ok(None)` once the queue is exhausted. A file that cannot
    /// be opened or read is fatal for the whole run.
    pub fn advance(&mut self) -> Result<Option<Source>, CmtxError> {
        let Some(input) = self.pending.pop_front() else {
            return Ok(None);
        };
        debug!(input = ?input.label(), remaining = self.pending.len(), "opening input");

        let source = match input {
            Input::File(name) => {
                let bytes = read_file(&name)?;
                Source::new(Some(name), &bytes)?
            }
            Input::Stdin { label } => {
                let mut bytes = Vec::new();
                if let Err(source) = io::stdin().lock().read_to_end(&mut bytes) {
                    return Err(CmtxError::Read { label, source });
                }
                Source::new(Some(label), &bytes)?
            }
            Input::Bytes { label, bytes } => Source::new(label, &bytes)?,
        };
        Ok(Some(source))
    }
}

/// Read a whole file. The handle is dropped on return.
fn read_file(name: &str) -> Result<Vec<u8>, CmtxError> {
    let mut file = File::open(name).map_err(|source| CmtxError::Open {
        path: PathBuf::from(name),
        source,
    })?;
    // Refuse before reading when the size is known up front.
    if let Ok(meta) = file.metadata() {
        check_len(Some(name), usize::try_from(meta.len()).unwrap_or(usize::MAX))?;
    }
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| CmtxError::Read {
            label: name.to_owned(),
            source,
        })?;
    Ok(bytes)
}

/// Reject inputs whose byte positions would not fit the scanner.
fn check_len(label: Option<&str>, len: usize) -> Result<(), CmtxError> {
    if len > SourceBuffer::MAX_LEN {
        return Err(CmtxError::TooLarge {
            label: label.unwrap_or("<input>").to_owned(),
            len,
            limit: SourceBuffer::MAX_LEN,
        });
    }
    Ok(())
}
