use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::plan::CheckPlan;
use crate::domain::report::CheckReport;
use crate::engine::check;
use crate::io::{self, Format, IoError};

/// Input arguments for the check command API.
#[derive(Debug, Clone)]
pub struct CheckCommandArgs {
    pub input: Option<PathBuf>,
    pub from: Option<Format>,
    pub plan: PathBuf,
    /// Replaces the plan's `context` when set.
    pub context: Option<String>,
    /// Replaces the plan's `detail` when set.
    pub detail: Option<String>,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run_with_stdin<R: Read>(args: &CheckCommandArgs, stdin: R) -> CheckCommandResponse {
    match execute(args, stdin) {
        Ok(report) => report_response(report),
        Err(CommandError::InputUsage(message)) => CheckCommandResponse {
            exit_code: 3,
            payload: json!({
                "error": "input_usage_error",
                "message": message,
            }),
        },
        Err(CommandError::Internal(message)) => CheckCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": message,
            }),
        },
    }
}

fn report_response(report: CheckReport) -> CheckCommandResponse {
    let exit_code = if report.passed { 0 } else { 2 };
    match serde_json::to_value(&report) {
        Ok(payload) => CheckCommandResponse { exit_code, payload },
        Err(_) => CheckCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": "failed to serialize check report"
            }),
        },
    }
}

fn execute<R: Read>(args: &CheckCommandArgs, stdin: R) -> Result<CheckReport, CommandError> {
    let mut plan = load_plan(args)?;
    if let Some(context) = &args.context {
        plan.context.clone_from(context);
    }
    if let Some(detail) = &args.detail {
        plan.detail.clone_from(detail);
    }

    let format = input_format(args)?;
    debug!(format = format.as_str(), "reading records");
    let records = load_records(args, stdin, format)?;
    check::execute_plan(&records, &plan)
        .map_err(|err| CommandError::InputUsage(format!("invalid check plan: {err}")))
}

/// `--from` wins, then the input extension; stdin without `--from` is JSON.
fn input_format(args: &CheckCommandArgs) -> Result<Format, CommandError> {
    match (args.from, args.input.as_deref()) {
        (Some(format), _) => Ok(format),
        (None, Some(path)) => {
            io::resolve_input_format(None, Some(path)).map_err(map_io_as_input_usage)
        }
        (None, None) => Ok(Format::Json),
    }
}

fn load_plan(args: &CheckCommandArgs) -> Result<CheckPlan, CommandError> {
    let format = io::resolve_input_format(None, Some(args.plan.as_path())).map_err(|err| {
        CommandError::InputUsage(format!(
            "unable to resolve plan format from `{}`: {err}",
            args.plan.display()
        ))
    })?;
    if !matches!(format, Format::Json | Format::Yaml) {
        return Err(CommandError::InputUsage(format!(
            "check plan must be json or yaml, got {format}"
        )));
    }
    let file = File::open(&args.plan).map_err(|err| {
        CommandError::InputUsage(format!(
            "failed to open plan file `{}`: {err}",
            args.plan.display()
        ))
    })?;
    let plan: Result<CheckPlan, String> = match format {
        Format::Yaml => serde_yaml::from_reader(file).map_err(|err| err.to_string()),
        _ => serde_json::from_reader(file).map_err(|err| err.to_string()),
    };
    plan.map_err(|err| CommandError::InputUsage(format!("invalid check plan: {err}")))
}

fn load_records<R: Read>(
    args: &CheckCommandArgs,
    stdin: R,
    format: Format,
) -> Result<Value, CommandError> {
    if let Some(path) = &args.input {
        let file = File::open(path).map_err(|err| {
            CommandError::InputUsage(format!(
                "failed to open input file `{}`: {err}",
                path.display()
            ))
        })?;
        io::reader::read_records(file, format).map_err(map_io_as_input_usage)
    } else {
        io::reader::read_records(stdin, format).map_err(map_io_as_input_usage)
    }
}

fn map_io_as_input_usage(error: IoError) -> CommandError {
    match error {
        IoError::Io(source) => CommandError::Internal(format!("io error: {source}")),
        other => CommandError::InputUsage(other.to_string()),
    }
}

enum CommandError {
    InputUsage(String),
    Internal(String),
}
