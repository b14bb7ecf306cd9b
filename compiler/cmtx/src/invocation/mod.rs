//! Command-line parsing.
//!
//! ```text
//! cmtx LINE CHAR_INDEX FILE...
//! ```
//!
//! `LINE == 0` scans every FILE from the top. A nonzero `LINE` reads the
//! content from standard input instead, labels it with the single FILE
//! argument, and starts counting at `LINE`/`CHAR_INDEX`. That lets a
//! caller feed a byte range cut from a larger document and still get
//! positions relative to the whole document.

use crate::error::UsageError;

/// Full usage text printed by `--help`.
pub const USAGE: &str = "\
usage: cmtx LINE CHAR_INDEX FILE...

Extract /* block */ and // line comments from C-family sources.
Prints a JSON array of {filename, line, char_index, text} records.

Arguments:
  LINE         0 to scan every FILE from line 1; otherwise the line
               number of the first byte read from standard input
  CHAR_INDEX   codepoint offset of the first byte read from standard
               input (ignored when LINE is 0)
  FILE...      files to scan; with a nonzero LINE, exactly one name,
               used only as the label for standard input

Options:
  -h, --help     Show this help message
  -V, --version  Show version

Set RUST_LOG (e.g. RUST_LOG=cmtx=debug) for diagnostic logging.";

/// Where scanning starts and whether positions reset between inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Every file starts at line 1, char index 0.
    Full,
    /// One stdin input starting at a caller-supplied position.
    Range { line: u64, char_index: u64 },
}

/// A validated scan request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    pub mode: ScanMode,
    /// File names. In range mode, the single label for standard input.
    pub files: Vec<String>,
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Scan(ScanConfig),
    Help,
    Version,
}

/// Parse arguments (without the program name).
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, UsageError> {
    if let [only] = args {
        match only.as_ref() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            _ => {}
        }
    }

    let [line, char_index, files @ ..] = args else {
        return Err(UsageError::MissingArguments);
    };
    if files.is_empty() {
        return Err(UsageError::MissingArguments);
    }

    let line = parse_number(line.as_ref())?;
    let char_index = parse_number(char_index.as_ref())?;
    let (Ok(line), Ok(char_index)) = (u64::try_from(line), u64::try_from(char_index)) else {
        return Err(UsageError::Negative);
    };

    let mode = if line == 0 {
        ScanMode::Full
    } else {
        if files.len() != 1 {
            return Err(UsageError::RangeNeedsOneFile);
        }
        ScanMode::Range { line, char_index }
    };

    Ok(Command::Scan(ScanConfig {
        mode,
        files: files.iter().map(|f| f.as_ref().to_owned()).collect(),
    }))
}

fn parse_number(arg: &str) -> Result<i64, UsageError> {
    arg.parse()
        .map_err(|_| UsageError::InvalidNumber(arg.to_owned()))
}
