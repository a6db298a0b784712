//! Purpose: Hold top-level CLI command dispatch for `keygate`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: `check` and `decode` exit with the verdict's exit code.
//! Invariants: Verdict logic lives in the library; this module only does I/O.

use super::*;

use crate::report_json::decode_report_json;
use keygate::api::{canonical_key, check, read_token, run_stdio};

pub(super) fn dispatch_command(command: Command) -> Result<RunOutcome, Error> {
    match command {
        Command::Check { variant } => {
            let verdict = run_stdio(variant.into())?;
            Ok(RunOutcome::with_code(verdict.exit_code()))
        }
        Command::Decode {
            variant,
            token,
            pretty,
        } => {
            let variant = Variant::from(variant);
            // Same tokenization as the interactive path: first word, capped length.
            let token = read_token(&mut token.as_bytes()).map_err(|err| {
                Error::new(ErrorKind::Internal)
                    .with_message("failed to tokenize argument")
                    .with_source(err)
            })?;
            let verdict = check(variant, token.as_ref());
            emit_json(decode_report_json(variant, token.as_ref(), &verdict)?, pretty)?;
            Ok(RunOutcome::with_code(verdict.exit_code()))
        }
        Command::Key { variant } => {
            println!("{}", canonical_key(variant.into()));
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_version_output()?;
            Ok(RunOutcome::ok())
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "keygate", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
    }
}
