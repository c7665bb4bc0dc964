use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use context_assert::cmd::check;
use context_assert::io::Format;
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "context-assert",
    version,
    about = "Contextualized checks for record collections"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a check plan against a record collection.
    Check(CheckArgs),
}

#[derive(Debug, clap::Args)]
struct CheckArgs {
    /// Check plan file (json or yaml).
    #[arg(long)]
    plan: PathBuf,

    /// Records file; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    from: Option<CliInputFormat>,

    /// Overrides the plan's context label.
    #[arg(long)]
    context: Option<String>,

    /// Overrides the plan's detail label.
    #[arg(long)]
    detail: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliInputFormat {
    Json,
    Yaml,
    Csv,
    Jsonl,
}

impl From<CliInputFormat> for Format {
    fn from(value: CliInputFormat) -> Self {
        match value {
            CliInputFormat::Json => Self::Json,
            CliInputFormat::Yaml => Self::Yaml,
            CliInputFormat::Csv => Self::Csv,
            CliInputFormat::Jsonl => Self::Jsonl,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    match cli.command {
        Commands::Check(args) => run_check(args),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_check(args: CheckArgs) -> i32 {
    let command_args = check::CheckCommandArgs {
        input: args.input,
        from: args.from.map(Into::into),
        plan: args.plan,
        context: args.context,
        detail: args.detail,
    };

    let stdin = io::stdin();
    let response = check::run_with_stdin(&command_args, stdin.lock());

    let emitted = match response.exit_code {
        0 | 2 => emit_json_stdout(&response.payload),
        1 | 3 => emit_json_stderr(&response.payload),
        other => {
            emit_error(
                "internal_error",
                format!("unexpected check exit code: {other}"),
                json!({"command": "check"}),
                1,
            );
            return 1;
        }
    };

    if emitted {
        response.exit_code
    } else {
        emit_error(
            "internal_error",
            "failed to serialize check response".to_string(),
            json!({"command": "check"}),
            1,
        );
        1
    }
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
