//! Purpose: `keygate` CLI entry point and command dispatch.
//! Role: Binary crate root; parses args, runs commands, emits text or JSON on stdout.
//! Invariants: `check` output is byte-identical to the standalone variant binaries.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is the verdict's code, or `api::to_exit_code` on error.
use std::io::{self, IsTerminal};

use clap::{CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use keygate::api::{Error, ErrorKind, Variant, init_tracing, to_exit_code};
use serde_json::{Map, Value, json};
use std::error::Error as StdError;

mod command_dispatch;
mod report_json;

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Try `keygate --help`."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command).map_err(|err| (err, color_mode))
}

#[derive(Parser)]
#[command(
    name = "keygate",
    version,
    about = "Check keys against the fixed digit-triplet variants",
    long_about = None,
    after_help = r#"EXAMPLES
  $ keygate check level2
  $ keygate decode level3 42042042042042042042042
  $ keygate key level2

The `level2` and `level3` binaries run `check` for one variant with no flags."#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum VariantCli {
    Level2,
    Level3,
}

impl From<VariantCli> for Variant {
    fn from(value: VariantCli) -> Self {
        match value {
            VariantCli::Level2 => Variant::Level2,
            VariantCli::Level3 => Variant::Level3,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Prompt for a key on stdin and print the verdict",
        long_about = r#"Prompt for a key on stdin and print the verdict.

Prints "Good job." and exits 0 on a match, or "Nope." and exits 1."#
    )]
    Check {
        #[arg(value_enum, help = "Variant to check against")]
        variant: VariantCli,
    },
    #[command(
        about = "Decode a key without prompting and print a JSON report",
        after_help = r#"EXAMPLES
  $ keygate decode level2 00101108097098101114101
  $ keygate decode level3 42042 --pretty"#
    )]
    Decode {
        #[arg(value_enum, help = "Variant to check against")]
        variant: VariantCli,
        #[arg(
            allow_hyphen_values = true,
            help = "Key token; only the first whitespace-delimited word is used"
        )]
        token: String,
        #[arg(long, help = "Pretty-print the JSON report")]
        pretty: bool,
    },
    #[command(about = "Print the key a variant accepts")]
    Key {
        #[arg(value_enum, help = "Variant to build the key for")]
        variant: VariantCli,
    },
    #[command(about = "Print version info")]
    Version,
    #[command(about = "Generate shell completions")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

fn emit_json(value: Value, pretty: bool) -> Result<(), Error> {
    let encoded = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    let json = encoded.map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("json encode failed")
            .with_source(err)
    })?;
    println!("{json}");
    Ok(())
}

fn emit_version_output() -> Result<(), Error> {
    if io::stdout().is_terminal() {
        println!("keygate {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    } else {
        emit_json(
            json!({
                "name": "keygate",
                "version": env!("CARGO_PKG_VERSION"),
            }),
            false,
        )
    }
}

const RED: &str = "31";
const YELLOW: &str = "33";

fn paint(label: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{code}m{label}\u{1b}[0m")
    } else {
        label.to_string()
    }
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    let rendered = if is_tty {
        error_text(err, color_mode.use_color(is_tty))
    } else {
        serde_json::to_string(&error_json(err))
            .unwrap_or_else(|_| r#"{"error":{"kind":"Internal"}}"#.to_string())
    };
    eprintln!("{rendered}");
}

fn error_message(err: &Error) -> String {
    err.message()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{:?}", err.kind()))
}

fn error_causes(err: &Error) -> Vec<String> {
    std::iter::successors(err.source(), |&source| source.source())
        .map(ToString::to_string)
        .collect()
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }
    json!({ "error": inner })
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = vec![format!(
        "{} {}",
        paint("error:", RED, use_color),
        error_message(err)
    )];
    lines.extend(
        err.hint()
            .map(|hint| format!("{} {hint}", paint("hint:", YELLOW, use_color))),
    );
    lines.extend(
        error_causes(err)
            .into_iter()
            .map(|cause| format!("{} {cause}", paint("caused by:", YELLOW, use_color))),
    );
    lines.join("\n")
}

// First non-empty line of clap's rendering, without its `error:` label.
fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.strip_prefix("error:").unwrap_or(line).trim().to_string())
        .unwrap_or_else(|| "invalid arguments".to_string())
}
