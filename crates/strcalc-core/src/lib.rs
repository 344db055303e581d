//! # strcalc-core: Pure String Calculator Logic
//!
//! Turns a delimiter-separated numeric string into a sum, or into a
//! position-accurate report of every rule the string breaks.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        strcalc Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    strcalc CLI (apps/strcalc-cli)               │   │
//! │  │        args / stdin ──► calculate ──► text or JSON output       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ strcalc-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ delimiter │  │validation │  │ tokenizer │  │diagnostics│  │   │
//! │  │   │  header   │  │  usage    │  │  split    │  │ aggregate │  │   │
//! │  │   │ separators│  │ trailing  │  │  sum      │  │ calculate │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`delimiter`] - Custom delimiter header and the active separator set
//! - [`validation`] - Separator usage and trailing separator checks
//! - [`tokenizer`] - Token parsing, summation, negative detection
//! - [`diagnostics`] - Aggregation and the [`calculate`] entry point
//! - [`error`] - Violations and the diagnostic report
//! - [`types`] - Serializable [`Outcome`]
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; calls share nothing
//! 2. **Collect, Don't Fail Fast**: every non-terminal violation is reported
//! 3. **Typed Violations**: data stays structured until it is displayed
//! 4. **No Panics**: every input maps to `Ok(sum)` or `Err(report)`
//!
//! ## Example Usage
//!
//! ```rust
//! use strcalc_core::{calculate, Violation};
//!
//! assert_eq!(calculate("//;\n1;3"), Ok(4));
//!
//! let report = calculate("2,-4,-9").unwrap_err();
//! assert_eq!(report.to_string(), "Negative number(s) not allowed: -4, -9");
//! assert_eq!(
//!     report.violations(),
//!     &[Violation::NegativeValues { values: vec![-4, -9] }]
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod delimiter;
pub mod diagnostics;
pub mod error;
pub mod tokenizer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use delimiter::{extract_delimiter, ParsedInput, Separators};
pub use diagnostics::calculate;
pub use error::{CalcResult, DiagnosticReport, Violation};
pub use types::Outcome;
