//! Command-line driver.
//!
//! Wires parsed arguments to a [`ScanContext`] writing JSON to `stdout`
//! and diagnostics to `stderr`, and turns the outcome into an exit code.

use std::io::{BufWriter, Write};

use cmtx_diagnostic::Reporter;
use tracing::debug;

use crate::emitter::JsonEmitter;
use crate::error::CmtxError;
use crate::invocation::{parse_args, Command, USAGE};
use crate::scanner::ScanContext;

/// Run `cmtx` with `args` (program name excluded). Returns the exit code.
pub fn run<S, O, E>(args: &[S], stdout: O, stderr: E) -> i32
where
    S: AsRef<str>,
    O: Write,
    E: Write,
{
    let mut reporter = Reporter::new(stderr);

    let config = match parse_args(args) {
        Ok(Command::Scan(config)) => config,
        Ok(Command::Help) => return print(stdout, USAGE, reporter),
        Ok(Command::Version) => {
            let version = format!("cmtx {}", env!("CARGO_PKG_VERSION"));
            return print(stdout, &version, reporter);
        }
        Err(err) => {
            reporter.error(CmtxError::from(err).diagnostic());
            reporter.flush();
            return reporter.exit_code();
        }
    };
    debug!(mode = ?config.mode, files = config.files.len(), "starting scan");

    let emitter = JsonEmitter::new(BufWriter::new(stdout));
    let mut ctx = ScanContext::new(&config, emitter, reporter);
    let result = ctx.run();
    let (emitter, mut reporter) = ctx.into_parts();
    if let Err(err) = result {
        // Push out whatever was already written. The run has failed
        // already, so a flush error is only logged.
        if let Err(flush_err) = emitter.into_inner().flush() {
            debug!(error = %flush_err, "flush after fatal error failed");
        }
        reporter.error(err.diagnostic());
    }
    reporter.flush();
    reporter.exit_code()
}

fn print<O: Write, E: Write>(mut stdout: O, text: &str, mut reporter: Reporter<E>) -> i32 {
    if let Err(err) = writeln!(stdout, "{text}").and_then(|()| stdout.flush()) {
        reporter.error(CmtxError::Output(err).diagnostic());
    }
    reporter.flush();
    reporter.exit_code()
}
