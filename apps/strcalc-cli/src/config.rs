//! CLI configuration module.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --format json  --log debug  --unescape[=false]                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     STRCALC_FORMAT=json  STRCALC_LOG=debug  STRCALC_UNESCAPE=true      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     text output, "warn" filter, input taken verbatim                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::env;

use clap::ValueEnum;

use crate::cli::{Cli, OutputFormat};

pub const ENV_FORMAT: &str = "STRCALC_FORMAT";
pub const ENV_LOG: &str = "STRCALC_LOG";
pub const ENV_UNESCAPE: &str = "STRCALC_UNESCAPE";

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Effective settings for one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// How the outcome is printed
    pub format: OutputFormat,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,

    /// Expand `\n` / `\\` escapes in the input before calculating
    pub unescape: bool,
}

impl CliConfig {
    /// Load configuration from flags, falling back to environment variables.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve(cli, |key| env::var(key).ok())
    }

    /// Same as [`CliConfig::load`] with an explicit variable lookup.
    pub fn resolve(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let format = match cli.format {
            Some(format) => format,
            None => match lookup(ENV_FORMAT) {
                Some(value) => OutputFormat::from_str(&value, true)
                    .map_err(|_| ConfigError::InvalidValue { key: ENV_FORMAT, value })?,
                None => OutputFormat::default(),
            },
        };

        let log_filter = cli
            .log
            .clone()
            .or_else(|| lookup(ENV_LOG))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let unescape = match cli.unescape {
            Some(unescape) => unescape,
            None => match lookup(ENV_UNESCAPE) {
                Some(value) => parse_bool(&value)
                    .ok_or(ConfigError::InvalidValue { key: ENV_UNESCAPE, value })?,
                None => false,
            },
        };

        Ok(CliConfig {
            format,
            log_filter,
            unescape,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve_with(cli: &Cli, vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::resolve(cli, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = resolve_with(&Cli::default(), &[]).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_filter, "warn");
        assert!(!config.unescape);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = resolve_with(
            &Cli::default(),
            &[(ENV_FORMAT, "JSON"), (ENV_LOG, "debug"), (ENV_UNESCAPE, "yes")],
        )
        .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
        assert!(config.unescape);
    }

    #[test]
    fn test_flags_override_env() {
        let cli = Cli {
            format: Some(OutputFormat::Text),
            log: Some("trace".to_string()),
            ..Cli::default()
        };
        let config = resolve_with(&cli, &[(ENV_FORMAT, "json"), (ENV_LOG, "debug")]).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_unescape_flag_can_switch_env_off() {
        let cli = Cli {
            unescape: Some(false),
            ..Cli::default()
        };
        let config = resolve_with(&cli, &[(ENV_UNESCAPE, "true")]).unwrap();
        assert!(!config.unescape);

        let cli = Cli {
            unescape: Some(true),
            ..Cli::default()
        };
        assert!(resolve_with(&cli, &[]).unwrap().unescape);
    }

    #[test]
    fn test_invalid_env_values() {
        let err = resolve_with(&Cli::default(), &[(ENV_FORMAT, "xml")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_FORMAT, .. }));

        let err = resolve_with(&Cli::default(), &[(ENV_UNESCAPE, "maybe")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STRCALC_UNESCAPE: \"maybe\"");
    }
}
