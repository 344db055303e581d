use std::io::Write;

use serde::Serialize;
use strcalc_core::Outcome;

use crate::cli::OutputFormat;
use crate::error::{CliError, Status};

#[derive(Serialize)]
struct JsonOut<'a> {
    ok: bool,
    #[serde(flatten)]
    outcome: &'a Outcome,
}

/// Prints `outcome` and returns the matching exit status.
///
/// Text mode writes the sum to `out` and a report to `err`. JSON mode writes
/// everything to `out` so it can be piped as-is.
pub fn render(
    outcome: &Outcome,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status, CliError> {
    let status = if outcome.is_sum() {
        Status::Sum
    } else {
        Status::Rejected
    };

    match (format, outcome) {
        (OutputFormat::Json, _) => {
            let body = serde_json::to_string_pretty(&JsonOut {
                ok: outcome.is_sum(),
                outcome,
            })?;
            writeln!(out, "{body}").map_err(CliError::WriteOutput)?;
        }
        (OutputFormat::Text, Outcome::Sum { value }) => {
            writeln!(out, "{value}").map_err(CliError::WriteOutput)?;
        }
        (OutputFormat::Text, Outcome::Errors { message, .. }) => {
            writeln!(err, "{message}").map_err(CliError::WriteOutput)?;
        }
    }

    Ok(status)
}
