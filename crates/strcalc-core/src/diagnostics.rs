//! # Diagnostics Module
//!
//! Runs every stage over one input and merges their findings into a single
//! report, or returns the sum when nothing is wrong.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input ──► "" ? ──yes──► Ok(0)                                          │
//! │              │                                                          │
//! │              no                                                         │
//! │              ▼                                                          │
//! │        extract_delimiter ──MalformedHeader──► Err(report of 1)         │
//! │              │                                                          │
//! │              ▼                                                          │
//! │   ┌──────────┼───────────────┬──────────────────┐                      │
//! │   ▼          ▼               ▼                  │                      │
//! │  usage     trailing      tokenize + sum         │ independent scans    │
//! │   │          │               │                  │                      │
//! │   └──────────┴───────┬───────┘                  │                      │
//! │                      ▼                                                  │
//! │          DiagnosticReport::from_violations                              │
//! │                      │                                                  │
//! │          None ──► Ok(total)     Some ──► Err(report)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::delimiter::{extract_delimiter, ParsedInput};
use crate::error::{CalcResult, DiagnosticReport, Violation};
use crate::tokenizer::{check_negatives, sum_tokens, tokenize, Summation};
use crate::validation::{validate_no_trailing_separator, validate_separator_usage};

/// Adds up the numbers in `input`, or explains everything wrong with it.
///
/// ## Example
/// ```rust
/// use strcalc_core::calculate;
///
/// assert_eq!(calculate(""), Ok(0));
/// assert_eq!(calculate("1\n2,3"), Ok(6));
/// assert_eq!(calculate("//sep\n2sep5"), Ok(7));
///
/// let report = calculate("//|\n1|2,-3").unwrap_err();
/// assert_eq!(
///     report.to_string(),
///     "'|' expected but ',' found at position 3.\nNegative number(s) not allowed: -3"
/// );
/// ```
pub fn calculate(input: &str) -> CalcResult<i64> {
    if input.is_empty() {
        return Ok(0);
    }

    let parsed = extract_delimiter(input).map_err(DiagnosticReport::terminal)?;
    let (summation, violations) = collect_violations(&parsed);

    match DiagnosticReport::from_violations(violations) {
        None => Ok(summation.total),
        Some(report) => {
            debug!(violations = report.len(), "Input rejected");
            Err(report)
        }
    }
}

/// Runs the non-terminal stages over an extracted payload.
///
/// Returned violations are grouped by stage but not yet ordered for display.
pub fn collect_violations(parsed: &ParsedInput<'_>) -> (Summation, Vec<Violation>) {
    let ParsedInput {
        separators,
        payload,
    } = parsed;

    let mut violations = validate_separator_usage(payload, separators);
    violations.extend(validate_no_trailing_separator(payload, separators));

    let summation = sum_tokens(&tokenize(payload, separators));
    violations.extend(check_negatives(&summation));

    (summation, violations)
}

// =============================================================================
// Unit Tests
// =============================================================================
