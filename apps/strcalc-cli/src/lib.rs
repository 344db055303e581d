//! # strcalc CLI
//!
//! Reads one input string, runs it through `strcalc_core::calculate` and
//! prints either the sum or the diagnostic report.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cli (clap) ──► CliConfig::load ──► tracing subscriber                  │
//! │                        │                                                │
//! │                        ▼                                                │
//! │              read_input (arg | stdin) ──► unescape? ──► calculate       │
//! │                                                            │            │
//! │                                                            ▼            │
//! │                                                 output::render ──► exit │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

use std::io::{Read, Write};

use strcalc_core::Outcome;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::{CliConfig, ConfigError};
use crate::error::{CliError, Status};

/// Installs the stderr fmt subscriber for this process.
pub fn init_tracing(config: &CliConfig) -> Result<(), ConfigError> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter).map_err(|e| {
        ConfigError::InvalidLogFilter {
            filter: config.log_filter.clone(),
            reason: e.to_string(),
        }
    })?;

    // A second init (e.g. from tests) keeps the first subscriber.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!(error = %e, "Tracing subscriber already installed");
    }

    Ok(())
}

/// Returns the positional input, or all of `stdin` when none was given.
///
/// Stdin is taken verbatim: a trailing newline is part of the input.
pub fn read_input(cli: &Cli, stdin: &mut impl Read) -> Result<String, CliError> {
    match &cli.input {
        Some(input) => Ok(input.clone()),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).map_err(CliError::ReadInput)?;
            Ok(buf)
        }
    }
}

/// Expands the `\n` and `\\` escapes so a header fits on one shell line.
///
/// Any other backslash sequence is left untouched.
pub fn unescape(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// Runs one calculation end to end with an already-loaded configuration.
pub fn run(
    cli: &Cli,
    config: &CliConfig,
    stdin: &mut impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Status, CliError> {
    let raw = read_input(cli, stdin)?;
    let input = if config.unescape { unescape(&raw) } else { raw };
    debug!(chars = input.chars().count(), "Calculating");

    let outcome = Outcome::from_input(&input);
    match &outcome {
        Outcome::Sum { value } => info!(value, "Calculation succeeded"),
        Outcome::Errors { violations, .. } => {
            info!(violations = violations.len(), "Calculation rejected input")
        }
    }

    output::render(&outcome, config.format, out, err)
}
