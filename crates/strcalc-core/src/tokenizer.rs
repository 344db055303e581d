//! # Tokenizer Module
//!
//! Splits the payload into integers and sums them while tracking negatives.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  payload "-1,2;-3\n-4"   (custom delimiter ";")                         │
//! │       │                                                                 │
//! │       ▼  normalize: ";" → ","                                          │
//! │  "-1,2,-3\n-4"                                                          │
//! │       │                                                                 │
//! │       ▼  split on "," AND "\n"                                         │
//! │  ["-1", "2", "-3", "-4"]                                                │
//! │       │                                                                 │
//! │       ▼  parse (empty / unparsable tokens dropped)                     │
//! │  [-1, 2, -3, -4]                                                        │
//! │       │                                                                 │
//! │       ▼  sum_tokens                                                    │
//! │  Summation { total: -6, negatives: [-1, -3, -4] }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Splitting on comma and newline even under a custom delimiter keeps
//! fragments joined by a wrong separator apart, so their negatives are still
//! reported alongside the usage violation.

use tracing::debug;

use crate::delimiter::{Separators, DEFAULT_SEPARATORS};
use crate::error::Violation;

// =============================================================================
// Summation
// =============================================================================

/// Running result of adding up the parsed tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summation {
    /// Sum of every token that fit in an `i64` accumulator.
    pub total: i64,

    /// Negative tokens in encounter order.
    pub negatives: Vec<i64>,
}

impl Summation {
    pub fn has_negatives(&self) -> bool {
        !self.negatives.is_empty()
    }
}

// =============================================================================
// Tokenizing
// =============================================================================

/// Parses every numeric token of `payload`, in order.
///
/// ## Rules
/// - Empty tokens (consecutive separators) are skipped
/// - Surrounding whitespace is ignored
/// - Digit-group underscores (`1_000`) are not accepted
/// - Tokens that are not base-10 `i64` values (including out-of-range
///   numbers) are dropped, never reported
///
/// ## Example
/// ```rust
/// use strcalc_core::delimiter::Separators;
/// use strcalc_core::tokenizer::tokenize;
///
/// assert_eq!(tokenize("1\n2,3", &Separators::Default), vec![1, 2, 3]);
/// assert_eq!(tokenize("1,,x,4", &Separators::Default), vec![1, 4]);
/// ```
pub fn tokenize(payload: &str, separators: &Separators) -> Vec<i64> {
    separators
        .normalize(payload)
        .split(DEFAULT_SEPARATORS)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<i64>() {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(token = %token, error = %err, "Dropping unparsable token");
                None
            }
        })
        .collect()
}

/// Adds up `values`, collecting negatives as it goes.
///
/// A value whose addition would overflow the accumulator is left out of the
/// total. It is still recorded as a negative when it is one.
pub fn sum_tokens(values: &[i64]) -> Summation {
    values.iter().fold(Summation::default(), |mut acc, &value| {
        if value < 0 {
            acc.negatives.push(value);
        }
        match acc.total.checked_add(value) {
            Some(total) => acc.total = total,
            None => debug!(value, total = acc.total, "Skipping value that overflows the sum"),
        }
        acc
    })
}

/// Turns the negatives of a summation into a single violation.
pub fn check_negatives(summation: &Summation) -> Option<Violation> {
    summation.has_negatives().then(|| Violation::NegativeValues {
        values: summation.negatives.clone(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
