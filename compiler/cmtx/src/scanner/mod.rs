//! Comment scanner.
//!
//! Drives the [`RawScanner`] over every input in a [`FileQueue`], turns
//! comment tokens into [`CommentRecord`]s for a [`CommentEmitter`], and
//! reports unterminated constructs through a [`Reporter`].
//!
//! # States
//!
//! | state          | token           | next state     |
//! |----------------|-----------------|----------------|
//! | `Normal`       | unterminated    | `Unterminated` |
//! | `Normal`       | any other token | `Normal`       |
//! | `Unterminated` | any token       | `Unterminated` |
//! | either         | end of input    | `Normal`       |
//!
//! In `Unterminated` the rest of the current input is skipped unread.

use std::io::Write;

use cmtx_diagnostic::{Location, Reporter, Unterminated};
use cmtx_lexer_core::{RawScanner, RawTag};
use tracing::{debug, trace, warn};

use crate::emitter::CommentEmitter;
use crate::error::CmtxError;
use crate::file_queue::{FileQueue, Source};
use crate::invocation::{ScanConfig, ScanMode};
use crate::position::ScanPosition;
use crate::record::CommentRecord;

/// Scanner automaton state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Classifying tokens.
    #[default]
    Normal,
    /// Discarding the rest of the current input.
    Unterminated,
}

/// What the automaton reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanEvent {
    Token(RawTag),
    EndOfInput,
}

impl ScanState {
    /// Transition function.
    #[must_use]
    pub fn next(self, event: ScanEvent) -> ScanState {
        match (self, event) {
            (_, ScanEvent::EndOfInput) => ScanState::Normal,
            (ScanState::Normal, ScanEvent::Token(tag)) if tag.is_unterminated() => {
                ScanState::Unterminated
            }
            (ScanState::Normal, ScanEvent::Token(_)) => ScanState::Normal,
            (ScanState::Unterminated, ScanEvent::Token(_)) => ScanState::Unterminated,
        }
    }
}

/// Totals for a finished scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Inputs scanned to the end.
    pub inputs: usize,
    /// Comment records emitted.
    pub records: usize,
    /// Unterminated constructs reported.
    pub unterminated: usize,
}

/// Everything one scan run mutates.
pub struct ScanContext<E: CommentEmitter, W: Write> {
    queue: FileQueue,
    position: ScanPosition,
    /// Full scans restart every input at [`ScanPosition::START`].
    reset_per_input: bool,
    state: ScanState,
    emitter: E,
    reporter: Reporter<W>,
    summary: ScanSummary,
}

impl<E: CommentEmitter, W: Write> ScanContext<E, W> {
    /// Context for a parsed command line.
    pub fn new(config: &ScanConfig, emitter: E, reporter: Reporter<W>) -> Self {
        Self::with_queue(FileQueue::from_config(config), config.mode, emitter, reporter)
    }

    /// Context for an explicit queue of inputs.
    pub fn with_queue(
        queue: FileQueue,
        mode: ScanMode,
        emitter: E,
        reporter: Reporter<W>,
    ) -> Self {
        let (position, reset_per_input) = match mode {
            ScanMode::Full => (ScanPosition::START, true),
            ScanMode::Range { line, char_index } => (ScanPosition::new(line, char_index), false),
        };
        ScanContext {
            queue,
            position,
            reset_per_input,
            state: ScanState::Normal,
            emitter,
            reporter,
            summary: ScanSummary::default(),
        }
    }

    /// Scan every queued input.
    ///
    /// The first input is opened before any output is written, so a
    /// first file that cannot be opened leaves the output empty. A later
    /// open failure stops the run with the array left open.
    pub fn run(&mut self) -> Result<ScanSummary, CmtxError> {
        let mut next = self.queue.advance()?;
        self.emitter.begin().map_err(CmtxError::Output)?;

        while let Some(source) = next {
            self.scan_source(&source)?;
            next = self.queue.advance()?;
        }

        self.emitter.end().map_err(CmtxError::Output)?;
        self.emitter.flush().map_err(CmtxError::Output)?;
        debug!(
            inputs = self.summary.inputs,
            records = self.summary.records,
            unterminated = self.summary.unterminated,
            "scan complete"
        );
        Ok(self.summary)
    }

    /// Scan one input to its end.
    fn scan_source(&mut self, source: &Source) -> Result<(), CmtxError> {
        let label = source.label();
        let buffer = source.buffer();
        for issue in buffer.encoding_issues() {
            warn!(
                input = ?label,
                pos = issue.pos,
                len = issue.len,
                "{}",
                issue.kind.describe()
            );
        }
        if self.reset_per_input {
            self.position = ScanPosition::START;
        }
        debug!(input = ?label, bytes = buffer.len(), "scanning");

        let records_before = self.summary.records;
        let cursor = buffer.cursor();
        let mut scanner = RawScanner::new(cursor);
        loop {
            if self.state == ScanState::Unterminated {
                let skipped = scanner.skip_rest();
                trace!(input = ?label, skipped, "skipping rest of input");
            }

            let start = scanner.pos();
            let token = scanner.next_token();
            if token.tag == RawTag::Eof {
                self.state = self.state.next(ScanEvent::EndOfInput);
                break;
            }
            let text = cursor.slice(start, start + token.len);
            self.state = self.state.next(ScanEvent::Token(token.tag));

            match token.tag {
                RawTag::BlockComment | RawTag::LineComment => {
                    let record = CommentRecord {
                        filename: label,
                        line: self.position.line,
                        char_index: self.position.char_index,
                        text,
                    };
                    trace!(line = record.line, char_index = record.char_index, "comment");
                    self.emitter.emit(&record).map_err(CmtxError::Output)?;
                    self.summary.records += 1;
                    self.position.advance_text(text);
                    self.position.absorb_newlines(text);
                }
                RawTag::String | RawTag::Char | RawTag::Text => self.position.advance_text(text),
                RawTag::Newline => self.position.newline(),
                RawTag::UnterminatedComment => self.unterminated(label, Unterminated::Comment),
                RawTag::UnterminatedString => self.unterminated(label, Unterminated::DoubleQuote),
                RawTag::UnterminatedChar => self.unterminated(label, Unterminated::SingleQuote),
                RawTag::Eof => {}
            }
        }

        self.summary.inputs += 1;
        debug!(
            input = ?label,
            records = self.summary.records - records_before,
            "input done"
        );
        Ok(())
    }

    fn unterminated(&mut self, label: Option<&str>, what: Unterminated) {
        debug!(input = ?label, line = self.position.line, "{what}");
        self.reporter.report(Location::new(label, self.position.line), what);
        self.summary.unterminated += 1;
    }

    /// Consume the context, returning the emitter and reporter.
    pub fn into_parts(self) -> (E, Reporter<W>) {
        (self.emitter, self.reporter)
    }
}
