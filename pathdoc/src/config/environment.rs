//! Environment variable handling for configuration overrides.
//!
//! `PATHDOC_*` variables override values from configuration files.

use std::env;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// `suggestion_limit` override.
pub const ENV_SUGGESTION_LIMIT: &str = "PATHDOC_SUGGESTION_LIMIT";
/// `log_dir` override.
pub const ENV_LOG_DIR: &str = "PATHDOC_LOG_DIR";
/// `action_log` override.
pub const ENV_ACTION_LOG: &str = "PATHDOC_ACTION_LOG";
/// `output_format` override.
pub const ENV_OUTPUT_FORMAT: &str = "PATHDOC_OUTPUT_FORMAT";
/// `shell` override.
pub const ENV_SHELL: &str = "PATHDOC_SHELL";
/// `color` override.
pub const ENV_COLOR: &str = "PATHDOC_COLOR";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathdoc::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PATHDOC_*` overrides to `config`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds a value of the wrong kind
    /// (e.g., a non-numeric limit or an unknown shell).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(val) = Self::var(ENV_SUGGESTION_LIMIT) {
            config.suggestion_limit = Some(val.parse().map_err(|_| Error::Validation {
                field: ENV_SUGGESTION_LIMIT.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Some(val) = Self::var(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(val));
        }

        if let Some(val) = Self::var(ENV_ACTION_LOG) {
            config.action_log = Some(Self::parse_bool(ENV_ACTION_LOG, &val)?);
        }

        if let Some(val) = Self::var(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(Self::parse_enum(ENV_OUTPUT_FORMAT, &val)?);
        }

        if let Some(val) = Self::var(ENV_SHELL) {
            config.shell = Some(Self::parse_enum(ENV_SHELL, &val)?);
        }

        if let Some(val) = Self::var(ENV_COLOR) {
            config.color = Some(Self::parse_enum(ENV_COLOR, &val)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse one of the named values of a CLI enum.
    fn parse_enum<T: ValueEnum>(field: &str, s: &str) -> Result<T> {
        T::from_str(s.trim(), true).map_err(|_| {
            let allowed: Vec<String> = T::value_variants()
                .iter()
                .filter_map(|v| v.to_possible_value().map(|p| p.get_name().to_string()))
                .collect();
            Error::Validation {
                field: field.into(),
                message: format!("Invalid value '{s}' (expected one of: {})", allowed.join(", ")),
            }
        })
    }
}
