//! Error types for the strcalc CLI.
//!
//! Rejected input is not an error here: it is a normal outcome and is
//! rendered like a sum. These variants cover the run itself failing.

use crate::config::ConfigError;

/// CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read input from stdin: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exit status reported by the `strcalc` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A sum was printed.
    Sum = 0,
    /// A diagnostic report was printed.
    Rejected = 1,
    /// Configuration, input or output failed.
    Failure = 2,
}

impl From<Status> for std::process::ExitCode {
    fn from(status: Status) -> Self {
        std::process::ExitCode::from(status as u8)
    }
}
