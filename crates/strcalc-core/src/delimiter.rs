//! # Delimiter Module
//!
//! Detects the optional custom-delimiter header and exposes the active
//! separator set together with the payload that remains.
//!
//! ## Header Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "//" <delimiter> "\n" <payload>                                        │
//! │                                                                         │
//! │  "//;\n1;3"      → Custom(";"),   payload "1;3"                        │
//! │  "//sep\n2sep5"  → Custom("sep"), payload "2sep5"                      │
//! │  "//\n1,2"       → Default,       payload "1,2"   (empty delimiter)    │
//! │  "1\n2,3"        → Default,       payload "1\n2,3" (no header)         │
//! │  "//;1;3"        → MalformedHeader (no newline)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::Violation;

/// Marker that opens a delimiter declaration.
pub const HEADER_MARKER: &str = "//";

/// Separators accepted when no custom delimiter is declared.
pub const DEFAULT_SEPARATORS: [char; 2] = [',', '\n'];

/// Character every recognized separator is normalized to before splitting.
pub const CANONICAL_SEPARATOR: char = ',';

// =============================================================================
// Separators
// =============================================================================

/// The active separator set for one calculation.
///
/// Every validation stage takes this value instead of re-deciding between
/// "custom delimiter" and "comma/newline" on its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Separators {
    /// Comma and newline are both valid.
    #[default]
    Default,

    /// Only this (non-empty) delimiter is valid.
    Custom(String),
}

impl Separators {
    /// Builds the separator set from the text declared in a header.
    ///
    /// An empty declaration (`//\n...`) behaves exactly as if no header
    /// had been given.
    pub fn from_declared(declared: &str) -> Self {
        if declared.is_empty() {
            Separators::Default
        } else {
            Separators::Custom(declared.to_string())
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Separators::Custom(_))
    }

    /// The delimiter text, if a custom one is active.
    pub fn custom(&self) -> Option<&str> {
        match self {
            Separators::Custom(delimiter) => Some(delimiter),
            Separators::Default => None,
        }
    }

    /// Text named as the expected separator in usage violations.
    ///
    /// The default set has no single expected separator; it reports the
    /// canonical comma.
    pub fn expected_label(&self) -> &str {
        match self {
            Separators::Custom(delimiter) => delimiter,
            Separators::Default => ",",
        }
    }

    /// Returns true if `payload` ends with an active separator.
    pub fn is_trailing(&self, payload: &str) -> bool {
        match self {
            Separators::Custom(delimiter) => payload.ends_with(delimiter.as_str()),
            Separators::Default => payload.ends_with(DEFAULT_SEPARATORS),
        }
    }

    /// Rewrites the payload so every active separator is a comma.
    pub fn normalize(&self, payload: &str) -> String {
        match self {
            Separators::Custom(delimiter) => {
                payload.replace(delimiter.as_str(), &CANONICAL_SEPARATOR.to_string())
            }
            Separators::Default => payload.replace('\n', &CANONICAL_SEPARATOR.to_string()),
        }
    }
}

// =============================================================================
// Extraction
// =============================================================================

/// Input split into its separator set and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub separators: Separators,
    pub payload: &'a str,
}

/// Strips an optional `//<delimiter>\n` header from `input`.
///
/// ## Rules
/// - No leading `//` → default separators, payload is the whole input
/// - Leading `//` without any newline → [`Violation::MalformedHeader`]
/// - Otherwise the delimiter runs up to the FIRST newline
///
/// ## Example
/// ```rust
/// use strcalc_core::delimiter::{extract_delimiter, Separators};
///
/// let parsed = extract_delimiter("//;\n1;3").unwrap();
/// assert_eq!(parsed.separators, Separators::Custom(";".to_string()));
/// assert_eq!(parsed.payload, "1;3");
///
/// assert!(extract_delimiter("//;1;3").is_err());
/// ```
pub fn extract_delimiter(input: &str) -> Result<ParsedInput<'_>, Violation> {
    let Some(rest) = input.strip_prefix(HEADER_MARKER) else {
        return Ok(ParsedInput {
            separators: Separators::Default,
            payload: input,
        });
    };

    let (declared, payload) = rest.split_once('\n').ok_or(Violation::MalformedHeader)?;

    Ok(ParsedInput {
        separators: Separators::from_declared(declared),
        payload,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
