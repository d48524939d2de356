//! Fix command implementation.
//!
//! This module implements the `fix` command, which runs the interactive
//! repair session and prints the proposed PATH value. The value is never
//! applied; the user copies the export line into their shell.

use crate::error::CliError;
use crate::utils::{
    action_sink, apply_color, current_path, format_report, load_configuration, log_file,
    open_action_log, stdin_prompter, GlobalOptions,
};
use clap::Args;
use pathdoc::audit::{FixAction, NullSink};
use pathdoc::output::{ColorMode, OutputFormat, Report};
use pathdoc::session::Prompter;
use pathdoc::{Config, FixSession, ShellType, SnapshotBuilder};
use std::path::PathBuf;

/// Interactively repair broken entries.
#[derive(Args)]
pub struct FixCommand {
    /// Shell syntax for the final export line
    #[arg(long, value_enum)]
    pub shell: Option<ShellType>,

    /// Directory for the action log
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Do not write an action log
    #[arg(long)]
    pub no_action_log: bool,

    /// Maximum number of suggestions per entry
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,

    /// When to color the final report
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,
}

impl FixCommand {
    /// Execute the fix command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            suggestion_limit: self.limit,
            log_dir: self.log_dir,
            action_log: self.no_action_log.then_some(false),
            shell: self.shell,
            color: self.color,
            ..Default::default()
        };
        let config = load_configuration(global, overrides)?;
        let raw = current_path(global);

        let mut prompter = stdin_prompter()?;
        run_fix(global, &config, &raw, self.json, prompter.as_mut())
    }
}

/// Run a fix session on `raw` and print the outcome.
///
/// Shared by `fix` and `inspect --fix`.
pub fn run_fix(
    global: &GlobalOptions,
    config: &Config,
    raw: &str,
    json: bool,
    prompter: &mut dyn Prompter,
) -> Result<(), CliError> {
    let shell = config.shell();
    let mut log = open_action_log(config, global.logger);
    let mut null = NullSink;

    let outcome = {
        let sink = action_sink(&mut log, &mut null);
        let initial = SnapshotBuilder::new().build(raw);
        sink.record(&FixAction::RunStarted {
            summary: initial.summary().clone(),
        });

        FixSession::new(raw, sink)
            .with_suggestion_limit(config.suggestion_limit())
            .with_shell(shell)
            .run(prompter)?
    };

    let report = Report::new(&outcome.snapshot).with_log_file(log_file(log.as_ref()));
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let color = apply_color(config.color());

    println!();
    if !json {
        println!("Final report");
        println!("============");
    }
    print!("{}", format_report(format, color, &report)?);
    if json {
        println!();
    }

    println!();
    println!("Proposed PATH (not applied). To use it in this shell, run:");
    println!("  {}", shell.path_export(&outcome.proposed));
    if !global.quiet {
        println!(
            "To keep it, add that line to {} or edit the file that sets PATH.",
            shell.profile_hint()
        );
    }

    Ok(())
}
