//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, ClassifyCommand, CompletionsCommand, FixCommand, InspectCommand, SuggestCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect, classify and repair the PATH search list.
#[derive(Parser)]
#[command(name = "pathdoc")]
#[command(version, about = "Inspect and repair the PATH search list", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Read configuration from FILE instead of ~/.pathdoc/config.yaml
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Analyze STR instead of the PATH environment variable
    #[arg(long, value_name = "STR", global = true, allow_hyphen_values = true)]
    pub path_string: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a report of every PATH entry
    Inspect(InspectCommand),

    /// Interactively repair broken entries and print the new value
    Fix(FixCommand),

    /// Suggest replacements for one PATH segment
    Suggest(SuggestCommand),

    /// Show the category of arbitrary directories
    Classify(ClassifyCommand),

    /// Exit non-zero if the PATH has problems
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
