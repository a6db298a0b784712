//! Purpose: Interactive prompt → read → check → message flow over any reader/writer.
//! Exports: `PROMPT`, `run_session`, `run_stdio`, `variant_main`.
//! Role: Thin I/O glue around `core::verdict::check`; binaries call into this.
//! Invariants: The prompt is written and flushed once, before any input is read.
//! Invariants: Exactly one verdict line is written per session.
//! Invariants: A failed read is a rejection, not an error; only output failures are errors.
use std::io::{self, BufRead, Write};

use crate::core::error::{Error, ErrorKind, to_exit_code};
use crate::core::token::read_token;
use crate::core::variant::Variant;
use crate::core::verdict::{Verdict, check};
use crate::logging::init_tracing;

pub const PROMPT: &str = "Please enter key: ";

pub fn run_session<R, W>(variant: Variant, input: &mut R, output: &mut W) -> Result<Verdict, Error>
where
    R: BufRead,
    W: Write,
{
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|err| output_error("failed to write prompt", err))?;

    let token = match read_token(input) {
        Ok(token) => token,
        Err(err) => {
            tracing::debug!(error = %err, "reading key failed");
            None
        }
    };

    let verdict = check(variant, token.as_ref());
    writeln!(output, "{}", verdict.message())
        .and_then(|()| output.flush())
        .map_err(|err| output_error("failed to write verdict", err))?;
    Ok(verdict)
}

pub fn run_stdio(variant: Variant) -> Result<Verdict, Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(variant, &mut stdin.lock(), &mut stdout.lock())
}

/// Full program body for a single-variant binary; returns the exit code.
pub fn variant_main(variant: Variant) -> i32 {
    init_tracing();
    match run_stdio(variant) {
        Ok(verdict) => verdict.exit_code(),
        Err(err) => {
            eprintln!("{}: {err}", variant.name());
            to_exit_code(err.kind())
        }
    }
}

fn output_error(message: &str, err: io::Error) -> Error {
    Error::new(ErrorKind::Io)
        .with_message(message)
        .with_hint("Check that stdout is still open.")
        .with_source(err)
}
