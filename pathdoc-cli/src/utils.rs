//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: configuration
//! loading, reading the PATH value, color control, the action log and the
//! interactive front end.

use crate::error::CliError;
use crate::prompt::RustylinePrompter;
use crate::tabular::TabularFormatter;
use pathdoc::audit::{ActionLog, ActionSink, NullSink};
use pathdoc::output::{
    ColorMode, HumanFormatter, JsonFormatter, OutputFormat, OutputFormatter, Report,
};
use pathdoc::session::{LinePrompter, Prompter};
use pathdoc::{Config, ConfigBuilder, Logger};
use std::env;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// PATH value to analyze instead of the environment.
    pub path_string: Option<String>,

    /// Diagnostics logger.
    pub logger: Logger,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (`overrides`, highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The PATH value to analyze: `--path-string`, else `$PATH`.
///
/// An unset `PATH` is treated as empty. Non-UTF-8 bytes are replaced.
pub fn current_path(global: &GlobalOptions) -> String {
    if let Some(ref value) = global.path_string {
        return value.clone();
    }
    env::var_os("PATH")
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Decide whether stdout output is colored, and tell `colored` about it.
pub fn apply_color(mode: ColorMode) -> bool {
    let enabled = mode.enabled(io::stdout().is_terminal());
    colored::control::set_override(enabled);
    enabled
}

/// Render a report in the requested format.
pub fn format_report(
    format: OutputFormat,
    color: bool,
    report: &Report<'_>,
) -> Result<String, CliError> {
    let formatter: Box<dyn OutputFormatter> = match format {
        OutputFormat::Human => Box::new(HumanFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(TabularFormatter::csv()),
        OutputFormat::Tsv => Box::new(TabularFormatter::tsv()),
    };
    formatter.format(report).map_err(CliError::from)
}

/// True when both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Open the action log if enabled.
///
/// A log that cannot be created is reported as a warning; the run
/// continues without one.
pub fn open_action_log(config: &Config, logger: Logger) -> Option<ActionLog> {
    if !config.action_log() {
        return None;
    }
    let Some(dir) = config.log_dir() else {
        logger.warn("no home directory; action log disabled");
        return None;
    };
    match ActionLog::create(&dir, logger) {
        Ok(log) => Some(log),
        Err(e) => {
            logger.warn(&format!("cannot create action log in {}: {e}", dir.display()));
            None
        }
    }
}

/// The sink for an optional action log.
pub fn action_sink<'a>(
    log: &'a mut Option<ActionLog>,
    null: &'a mut NullSink,
) -> &'a mut dyn ActionSink {
    match log {
        Some(log) => log,
        None => null,
    }
}

/// The log file path for an optional action log.
pub fn log_file(log: Option<&ActionLog>) -> Option<&Path> {
    log.map(ActionLog::path)
}

/// The interactive front end: a line editor on a terminal, plain line
/// reads otherwise so that scripted input works.
pub fn stdin_prompter() -> Result<Box<dyn Prompter>, CliError> {
    if is_interactive() {
        Ok(Box::new(RustylinePrompter::new()?))
    } else {
        Ok(Box::new(LinePrompter::new(io::stdin().lock(), io::stdout())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathdoc::LogLevel;

    fn global(path_string: Option<&str>) -> GlobalOptions {
        GlobalOptions {
            quiet: true,
            config: None,
            path_string: path_string.map(str::to_string),
            logger: Logger::new(LogLevel::Quiet),
        }
    }

    #[test]
    fn test_path_string_overrides_environment() {
        assert_eq!(current_path(&global(Some("/a:/b"))), "/a:/b");
        assert_eq!(current_path(&global(Some(""))), "");
    }

    #[test]
    fn test_format_report_dispatch() {
        let snapshot = pathdoc::SnapshotBuilder::new().build("/nonexistent/bin");
        let report = Report::new(&snapshot);

        let human = format_report(OutputFormat::Human, false, &report).unwrap();
        assert!(human.starts_with("PATH report"));

        let json = format_report(OutputFormat::Json, false, &report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["total_entries"], 1);

        let tsv = format_report(OutputFormat::Tsv, false, &report).unwrap();
        assert_eq!(tsv.lines().count(), 2);
    }

    #[test]
    fn test_disabled_action_log() {
        let config = Config {
            action_log: Some(false),
            ..Default::default()
        };
        assert!(open_action_log(&config, Logger::new(LogLevel::Quiet)).is_none());
    }

    #[test]
    fn test_action_log_in_configured_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            log_dir: Some(dir.path().join("logs")),
            ..Default::default()
        };
        let log = open_action_log(&config, Logger::new(LogLevel::Quiet)).unwrap();
        assert!(log.path().starts_with(dir.path().join("logs")));
        assert_eq!(log_file(Some(&log)), Some(log.path()));
    }
}
