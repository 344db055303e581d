//! # Outcome Types
//!
//! Data form of a calculation result, for callers that ship results
//! somewhere (JSON, logs) instead of matching on a `Result`.
//!
//! ```text
//! ┌─────────────────────────────┐   ┌─────────────────────────────────────┐
//! │  Outcome::Sum               │   │  Outcome::Errors                    │
//! │  ─────────────              │   │  ───────────────                    │
//! │  value: i64                 │   │  message: String  (newline-joined)  │
//! │                             │   │  violations: Vec<Violation>         │
//! └─────────────────────────────┘   └─────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::diagnostics::calculate;
use crate::error::{CalcResult, DiagnosticReport, Violation};

/// Either the computed sum or the rendered diagnostic report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Sum {
        value: i64,
    },
    Errors {
        message: String,
        violations: Vec<Violation>,
    },
}

impl Outcome {
    /// Runs [`calculate`] and wraps the result.
    pub fn from_input(input: &str) -> Self {
        calculate(input).into()
    }

    pub fn is_sum(&self) -> bool {
        matches!(self, Outcome::Sum { .. })
    }

    /// The sum, if the input was valid.
    pub fn sum(&self) -> Option<i64> {
        match self {
            Outcome::Sum { value } => Some(*value),
            Outcome::Errors { .. } => None,
        }
    }

    /// The newline-joined report, if the input was rejected.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Sum { .. } => None,
            Outcome::Errors { message, .. } => Some(message),
        }
    }
}

impl From<DiagnosticReport> for Outcome {
    fn from(report: DiagnosticReport) -> Self {
        Outcome::Errors {
            message: report.to_string(),
            violations: report.into_violations(),
        }
    }
}

impl From<CalcResult<i64>> for Outcome {
    fn from(result: CalcResult<i64>) -> Self {
        match result {
            Ok(value) => Outcome::Sum { value },
            Err(report) => report.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
