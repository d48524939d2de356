//! Output formatting for snapshots.
//!
//! A [`Report`] pairs a [`Snapshot`] with the optional action log location;
//! an [`OutputFormatter`] renders it. The library ships the human-readable
//! and JSON renderers. Tabular listings (CSV/TSV) are produced by the
//! command-line front end on top of the same trait.

mod formatters;
mod shell;

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::snapshot::Snapshot;
use crate::Result;

pub use formatters::{display_path, HumanFormatter, JsonFormatter};
pub use shell::ShellType;

/// What a formatter renders.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// The analyzed PATH value.
    pub snapshot: &'a Snapshot,
    /// Where this run's action log was written, if anywhere.
    pub log_file: Option<&'a Path>,
}

impl<'a> Report<'a> {
    /// A report without a log file.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            log_file: None,
        }
    }

    /// Attach the action log location.
    #[must_use]
    pub fn with_log_file(mut self, log_file: Option<&'a Path>) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Trait for rendering a report.
pub trait OutputFormatter {
    /// Render the report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, report: &Report<'_>) -> Result<String>;
}

/// Available report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned text report.
    #[default]
    Human,
    /// One JSON document.
    Json,
    /// Comma-separated entry listing.
    Csv,
    /// Tab-separated entry listing.
    Tsv,
}

/// When to color human output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when writing to a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Decide whether to color, given whether stdout is a terminal.
    ///
    /// ```
    /// use pathdoc::output::ColorMode;
    ///
    /// assert!(ColorMode::Always.enabled(false));
    /// assert!(!ColorMode::Never.enabled(true));
    /// assert!(!ColorMode::Auto.enabled(false));
    /// ```
    #[must_use]
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}
