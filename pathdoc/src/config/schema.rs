//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from different
//! sources can be layered. The accessor methods resolve missing values to
//! the built-in defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::{ColorMode, OutputFormat, ShellType};

/// Number of suggestions offered per broken entry unless configured.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Largest accepted `suggestion_limit`.
pub const MAX_SUGGESTION_LIMIT: usize = 64;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathdoc::config::Config;
/// use pathdoc::output::OutputFormat;
///
/// let config: Config = serde_yaml::from_str("suggestion_limit: 4\noutput_format: json\n").unwrap();
/// assert_eq!(config.suggestion_limit(), 4);
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert!(config.action_log());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of suggestions per broken entry.
    pub suggestion_limit: Option<usize>,

    /// Directory for fix action logs.
    pub log_dir: Option<PathBuf>,

    /// Whether fix sessions write an action log.
    pub action_log: Option<bool>,

    /// Report format for `inspect`.
    pub output_format: Option<OutputFormat>,

    /// Shell syntax for the final export line.
    pub shell: Option<ShellType>,

    /// When to color human output.
    pub color: Option<ColorMode>,
}

impl Config {
    /// Effective suggestion limit.
    #[must_use]
    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT)
    }

    /// Effective log directory, `~/.pathdoc/logs` by default.
    #[must_use]
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir.clone().or_else(crate::audit::default_log_dir)
    }

    /// Whether to write an action log; on by default.
    #[must_use]
    pub fn action_log(&self) -> bool {
        self.action_log.unwrap_or(true)
    }

    /// Effective report format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Effective shell, detected from the environment when unset.
    #[must_use]
    pub fn shell(&self) -> ShellType {
        self.shell.unwrap_or_else(ShellType::detect)
    }

    /// Effective color mode.
    #[must_use]
    pub fn color(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.suggestion_limit(), DEFAULT_SUGGESTION_LIMIT);
        assert!(config.action_log());
        assert_eq!(config.output_format(), OutputFormat::Human);
        assert_eq!(config.color(), ColorMode::Auto);
    }

    #[test]
    fn test_parse_full_file() {
        let yaml = r"
suggestion_limit: 3
log_dir: /var/log/pathdoc
action_log: false
output_format: tsv
shell: fish
color: never
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.suggestion_limit(), 3);
        assert_eq!(config.log_dir(), Some(PathBuf::from("/var/log/pathdoc")));
        assert!(!config.action_log());
        assert_eq!(config.output_format(), OutputFormat::Tsv);
        assert_eq!(config.shell(), ShellType::Fish);
        assert_eq!(config.color(), ColorMode::Never);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("suggestions: 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("shell: tcsh\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_nothing() {
        let config = Config {
            suggestion_limit: Some(2),
            shell: Some(ShellType::PowerShell),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("suggestion_limit: 2"));
        assert!(yaml.contains("shell: powershell"));
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
