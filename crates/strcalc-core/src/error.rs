//! # Error Types
//!
//! Violations and the aggregated diagnostic report for strcalc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  strcalc-core errors (this file)                                       │
//! │  ├── Violation         - One broken rule, with its data                │
//! │  └── DiagnosticReport  - Every violation of one call, in order         │
//! │                                                                         │
//! │  strcalc-cli errors (separate crate)                                   │
//! │  └── CliError          - Config, stdin and rendering failures          │
//! │                                                                         │
//! │  Flow: Violation(s) → DiagnosticReport → CLI exit code 1               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Violation Classes
//! | Variant               | Fatal | How many per call  |
//! |-----------------------|-------|--------------------|
//! | `MalformedHeader`     | yes   | exactly one, alone |
//! | `UnexpectedSeparator` | no    | any number         |
//! | `TrailingSeparator`   | no    | at most one        |
//! | `NegativeValues`      | no    | at most one        |

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Violation
// =============================================================================

/// A single rule the input breaks.
///
/// Violations keep their raw data (character, position, values) and are only
/// turned into text by `Display`. The rendered messages are part of the
/// public contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Input starts with `//` but no newline ends the delimiter declaration.
    ///
    /// Terminal: without a newline there is no payload to validate, so this
    /// is always reported on its own.
    #[error("Invalid format: missing newline after delimiter definition")]
    MalformedHeader,

    /// A comma or newline was used while a custom delimiter is active.
    ///
    /// `position` is a zero-based character index into the payload, not the
    /// raw input.
    #[error("'{expected}' expected but '{found}' found at position {position}.")]
    UnexpectedSeparator {
        expected: String,
        found: char,
        position: usize,
    },

    /// The payload ends with an active separator.
    #[error("Input cannot end with a separator")]
    TrailingSeparator,

    /// One or more negative numbers, in the order they were encountered.
    #[error("Negative number(s) not allowed: {}", join_values(.values))]
    NegativeValues { values: Vec<i64> },
}

impl Violation {
    /// Returns true for violations that stop the calculation immediately.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Violation::MalformedHeader)
    }

    /// Fixed rank used to order violations in the final report.
    pub(crate) fn report_rank(&self) -> u8 {
        match self {
            Violation::MalformedHeader => 0,
            Violation::UnexpectedSeparator { .. } => 1,
            Violation::TrailingSeparator => 2,
            Violation::NegativeValues { .. } => 3,
        }
    }
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Diagnostic Report
// =============================================================================

/// Every violation found in one call, ordered for display.
///
/// ## Ordering
/// ```text
/// UnexpectedSeparator (left to right)
///      │
///      ▼
/// TrailingSeparator (0 or 1)
///      │
///      ▼
/// NegativeValues (0 or 1)
/// ```
///
/// A report is never empty: a call with no violations returns a sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    violations: Vec<Violation>,
}

impl DiagnosticReport {
    /// Builds a report, or `None` when there is nothing to report.
    ///
    /// Violations are stable-sorted by category, so the relative order of
    /// separator violations (left to right through the payload) is kept.
    pub fn from_violations(mut violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            return None;
        }
        violations.sort_by_key(Violation::report_rank);
        Some(Self { violations })
    }

    /// Report holding only a terminal violation.
    pub(crate) fn terminal(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Reports built by this crate are never empty.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Rendered messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl std::error::Error for DiagnosticReport {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result of one calculation: the sum, or the full diagnostic report.
pub type CalcResult<T> = Result<T, DiagnosticReport>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        let err = Violation::UnexpectedSeparator {
            expected: "|".to_string(),
            found: ',',
            position: 3,
        };
        assert_eq!(err.to_string(), "'|' expected but ',' found at position 3.");

        assert_eq!(
            Violation::TrailingSeparator.to_string(),
            "Input cannot end with a separator"
        );
        assert_eq!(
            Violation::MalformedHeader.to_string(),
            "Invalid format: missing newline after delimiter definition"
        );
    }

    #[test]
    fn test_negative_values_message_keeps_order() {
        let err = Violation::NegativeValues {
            values: vec![-4, -9, -1],
        };
        assert_eq!(err.to_string(), "Negative number(s) not allowed: -4, -9, -1");
    }

    #[test]
    fn test_newline_is_rendered_verbatim() {
        let err = Violation::UnexpectedSeparator {
            expected: ";".to_string(),
            found: '\n',
            position: 3,
        };
        assert_eq!(err.to_string(), "';' expected but '\n' found at position 3.");
    }

    #[test]
    fn test_report_orders_by_category() {
        let report = DiagnosticReport::from_violations(vec![
            Violation::NegativeValues { values: vec![-2] },
            Violation::TrailingSeparator,
            Violation::UnexpectedSeparator {
                expected: ";".to_string(),
                found: ',',
                position: 1,
            },
            Violation::UnexpectedSeparator {
                expected: ";".to_string(),
                found: '\n',
                position: 5,
            },
        ])
        .unwrap();

        let ranks: Vec<u8> = report.violations().iter().map(Violation::report_rank).collect();
        assert_eq!(ranks, vec![1, 1, 2, 3]);
        assert!(matches!(
            report.violations()[0],
            Violation::UnexpectedSeparator { position: 1, .. }
        ));
        assert!(matches!(
            report.violations()[1],
            Violation::UnexpectedSeparator { position: 5, .. }
        ));
    }

    #[test]
    fn test_report_joins_with_newline() {
        let report = DiagnosticReport::from_violations(vec![
            Violation::TrailingSeparator,
            Violation::NegativeValues { values: vec![-2] },
        ])
        .unwrap();
        assert_eq!(
            report.to_string(),
            "Input cannot end with a separator\nNegative number(s) not allowed: -2"
        );
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_empty_violations_give_no_report() {
        assert!(DiagnosticReport::from_violations(Vec::new()).is_none());
    }

    #[test]
    fn test_only_malformed_header_is_terminal() {
        assert!(Violation::MalformedHeader.is_terminal());
        assert!(!Violation::TrailingSeparator.is_terminal());
    }

    #[test]
    fn test_violation_serializes_with_kind_tag() {
        let json = serde_json::to_value(Violation::UnexpectedSeparator {
            expected: "|".to_string(),
            found: ',',
            position: 3,
        })
        .unwrap();
        assert_eq!(json["kind"], "unexpected_separator");
        assert_eq!(json["found"], ",");
        assert_eq!(json["position"], 3);
    }
}
