//! Inspect command implementation.
//!
//! This module implements the `inspect` command, which prints the PATH
//! report in one of the supported formats (human, JSON, CSV, TSV) and can
//! hand over to the fix session.

use crate::commands::fix::run_fix;
use crate::error::CliError;
use crate::utils::{
    apply_color, current_path, format_report, is_interactive, load_configuration, stdin_prompter,
    GlobalOptions,
};
use clap::Args;
use pathdoc::output::{ColorMode, OutputFormat, Report};
use pathdoc::{Config, SnapshotBuilder};

/// Print a report of every PATH entry.
#[derive(Args)]
pub struct InspectCommand {
    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Start fix mode after the report
    #[arg(long)]
    pub fix: bool,

    /// Never offer to start fix mode
    #[arg(long, conflicts_with = "fix")]
    pub no_prompt: bool,

    /// When to color human output
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            output_format: self.format,
            color: self.color,
            ..Default::default()
        };
        let config = load_configuration(global, overrides)?;
        let raw = current_path(global);

        let snapshot = SnapshotBuilder::new().build(&raw);
        let format = config.output_format();
        let color = apply_color(config.color());
        print!("{}", format_report(format, color, &Report::new(&snapshot))?);
        if format == OutputFormat::Json {
            println!();
        }

        if self.fix {
            let mut prompter = stdin_prompter()?;
            return run_fix(global, &config, &raw, false, prompter.as_mut());
        }

        let offer = format == OutputFormat::Human
            && !self.no_prompt
            && snapshot.broken_count() > 0
            && is_interactive();
        if offer {
            let mut prompter = stdin_prompter()?;
            prompter.say("")?;
            let answer = prompter.ask(&format!(
                "{} broken entr{} found. Start interactive fix mode now? [y/N]: ",
                snapshot.broken_count(),
                if snapshot.broken_count() == 1 { "y" } else { "ies" }
            ))?;
            if answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")) {
                return run_fix(global, &config, &raw, false, prompter.as_mut());
            }
        }

        Ok(())
    }
}
