//! # Validation Module
//!
//! Payload checks that run independently of summation.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Header (delimiter module)                                    │
//! │  └── MalformedHeader - terminal, stops everything                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Payload shape (THIS MODULE)                                  │
//! │  ├── UnexpectedSeparator - comma/newline under a custom delimiter      │
//! │  └── TrailingSeparator   - payload ends with an active separator       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Values (tokenizer module)                                    │
//! │  └── NegativeValues                                                    │
//! │                                                                         │
//! │  Layers 2 and 3 never short-circuit: all findings are collected        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::delimiter::{Separators, DEFAULT_SEPARATORS};
use crate::error::Violation;

// =============================================================================
// Separator Usage
// =============================================================================

/// Reports every comma or newline in `payload` while a custom delimiter is
/// active.
///
/// ## Rules
/// - Default separators → never reports anything
/// - One violation per offending character, left to right
/// - `position` counts characters within the payload, starting at 0
///
/// ## Example
/// ```rust
/// use strcalc_core::delimiter::Separators;
/// use strcalc_core::validation::validate_separator_usage;
///
/// let custom = Separators::from_declared("|");
/// let found = validate_separator_usage("1|2,3", &custom);
/// assert_eq!(found[0].to_string(), "'|' expected but ',' found at position 3.");
///
/// assert!(validate_separator_usage("1,2\n3", &Separators::Default).is_empty());
/// ```
pub fn validate_separator_usage(payload: &str, separators: &Separators) -> Vec<Violation> {
    if !separators.is_custom() {
        return Vec::new();
    }
    let expected = separators.expected_label();

    payload
        .chars()
        .enumerate()
        .filter(|(_, c)| DEFAULT_SEPARATORS.contains(c))
        .map(|(position, found)| Violation::UnexpectedSeparator {
            expected: expected.to_string(),
            found,
            position,
        })
        .collect()
}

// =============================================================================
// Trailing Separator
// =============================================================================

/// Reports a payload that ends with an active separator.
///
/// Only the active set counts: under `//|\n`, a payload ending in `,` is a
/// usage problem, not a trailing one.
pub fn validate_no_trailing_separator(payload: &str, separators: &Separators) -> Option<Violation> {
    separators
        .is_trailing(payload)
        .then_some(Violation::TrailingSeparator)
}

// =============================================================================
// Unit Tests
// =============================================================================
