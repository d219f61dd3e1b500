//! Purpose: `jsonmin` CLI entry point: parse args, minify, emit results.
//! Role: Binary crate root; thin wrapper over `jsonmin::api`.
//! Invariants: stdout carries only minified JSON or write receipts.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
#![allow(clippy::result_large_err)]
use std::error::Error as StdError;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};

use jsonmin::api::{
    Error, ErrorKind, MinifyOutcome, MinifyRequest, WriteReceipt, minify, to_exit_code,
};

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
    let cli = match Cli::try_parse_from(std::env::args_os()) {
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
                let message = clap_error_summary(&err);
                let hint = clap_error_hint(&err);
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(message)
                        .with_hint(hint),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::aot::generate(shell, &mut cmd, "jsonmin", &mut io::stdout());
        return Ok(RunOutcome::ok());
    }

    let Some(source) = cli.source else {
        return Err((
            Error::new(ErrorKind::Usage)
                .with_message("missing source path")
                .with_hint("Provide a JSON file to minify, e.g. `jsonmin data.json`."),
            color_mode,
        ));
    };

    run_minify(source, cli.out)
        .map_err(add_invalid_json_hint)
        .map_err(add_io_hint)
        .map_err(add_internal_hint)
        .map_err(|err| (err, color_mode))
}

fn run_minify(source: PathBuf, out: Option<PathBuf>) -> Result<RunOutcome, Error> {
    let mut request = MinifyRequest::new(&source);
    if let Some(out) = out {
        request = request.with_destination(out);
    }

    let outcome = minify(&request).map_err(|err| add_missing_source_hint(err, &source))?;
    match outcome {
        MinifyOutcome::Text(text) => println!("{text}"),
        MinifyOutcome::Written(receipt) => emit_write_receipt(&receipt),
    }
    Ok(RunOutcome::ok())
}

#[derive(Parser, Debug)]
#[command(
    name = "jsonmin",
    version,
    about = "Minify JSON documents from the command line",
    help_template = r#"{about-with-newline}
{before-help}USAGE
  {usage}

ARGUMENTS
{positionals}

OPTIONS
{options}

{after-help}
"#,
    long_about = None,
    before_help = r#"Reads a JSON file, drops the whitespace between tokens, and emits one
compact line. The document itself is untouched: member order, string
contents, and number literals all survive verbatim.
"#,
    after_help = r#"EXAMPLES
  $ jsonmin data.json                       # compact text on stdout
  $ jsonmin data.json -o data.min.json      # write a .min file instead
  $ jsonmin data.json | jq .keys            # pipe onward

LEARN MORE
  $ jsonmin --help
  https://github.com/jsonmin/jsonmin"#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        help = "Path to the JSON document to minify",
        value_hint = ValueHint::FilePath,
        required_unless_present = "completions"
    )]
    source: Option<PathBuf>,
    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        help = "Write the minified document to this file instead of stdout",
        value_hint = ValueHint::FilePath
    )]
    out: Option<PathBuf>,
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,
    #[arg(
        long,
        value_name = "SHELL",
        help = "Print a shell completion script and exit",
        conflicts_with_all = ["source", "out"]
    )]
    completions: Option<Shell>,
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

fn add_missing_source_hint(err: Error, source: &Path) -> Error {
    if err.kind() != ErrorKind::NotFound || err.hint().is_some() {
        return err;
    }
    err.with_hint(format!(
        "No file at `{}`. Check the path; relative paths resolve against the current directory.",
        source.display()
    ))
}

fn add_invalid_json_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::InvalidJson || err.hint().is_some() {
        return err;
    }
    err.with_hint(
        "The document must be strict JSON: no trailing commas, comments, or unquoted keys.",
    )
}

fn add_io_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Io || err.hint().is_some() {
        return err;
    }
    err.with_hint("I/O error. Check the path, permissions, and disk space.")
}

fn add_internal_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Internal || err.hint().is_some() {
        return err;
    }
    err.with_hint(
        "Unexpected internal failure. Retry with RUST_BACKTRACE=1 and share command/context if it persists.",
    )
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_write_receipt(receipt: &WriteReceipt) {
    if io::stdout().is_terminal() {
        println!(
            "minified {} -> {} ({} bytes)",
            receipt.source.display(),
            receipt.destination.display(),
            receipt.bytes
        );
        return;
    }

    let value = receipt_json(receipt);
    let json = serde_json::to_string(&value)
        .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

fn receipt_json(receipt: &WriteReceipt) -> Value {
    json!({
        "written": {
            "source": receipt.source.display().to_string(),
            "destination": receipt.destination.display().to_string(),
            "bytes": receipt.bytes,
        }
    })
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::NotFound => "source file not found".to_string(),
        ErrorKind::InvalidJson => "invalid JSON".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    if let Some(line) = err.line() {
        inner.insert("line".to_string(), json!(line));
    }
    if let Some(column) = err.column() {
        inner.insert("column".to_string(), json!(column));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("path:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }
    if let Some(line) = err.line() {
        lines.push(format!(
            "{} {line}",
            colorize_label("line:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(column) = err.column() {
        lines.push(format!(
            "{} {column}",
            colorize_label("column:", use_color, AnsiColor::Yellow)
        ));
    }

    let causes = error_causes(err);
    if let Some(cause) = causes.first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

fn clap_error_hint(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let missing_required = rendered.contains("required arguments were not provided")
        || rendered.contains("required argument was not provided");
    if missing_required {
        return "Provide a JSON file to minify, e.g. `jsonmin data.json`.".to_string();
    }
    "Try `jsonmin --help`.".to_string()
}
