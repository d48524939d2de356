//! Check command implementation.
//!
//! Exits with status 1 when the PATH has problems, for use in scripts and
//! shell startup files.

use crate::error::CliError;
use crate::utils::{current_path, GlobalOptions};
use clap::Args;
use pathdoc::output::display_path;
use pathdoc::SnapshotBuilder;

/// Exit non-zero if the PATH has problems.
#[derive(Args)]
pub struct CheckCommand {
    /// Do not fail on duplicate entries
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Do not fail on shadowed entries
    #[arg(long)]
    pub allow_shadowed: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let snapshot = SnapshotBuilder::new().build(&current_path(global));
        let summary = snapshot.summary();
        if summary.is_clean() {
            global.logger.info(&format!(
                "PATH ok: {} entries checked",
                summary.total_entries
            ));
            return Ok(());
        }

        let mut problems = Vec::new();
        if !summary.broken.is_empty() {
            problems.push(format!("{} broken", summary.broken.len()));
        }
        if !self.allow_duplicates && !summary.duplicates.is_empty() {
            problems.push(format!("{} duplicate", summary.duplicates.len()));
        }
        if !self.allow_shadowed && !summary.shadowed.is_empty() {
            problems.push(format!("{} shadowed", summary.shadowed.len()));
        }

        if !global.quiet {
            for entry in snapshot.entries() {
                let flags: Vec<String> = entry
                    .flags()
                    .iter()
                    .filter(|flag| match flag {
                        pathdoc::Flag::Broken => true,
                        pathdoc::Flag::Duplicate(_) => !self.allow_duplicates,
                        pathdoc::Flag::Shadow(_) => !self.allow_shadowed,
                    })
                    .map(ToString::to_string)
                    .collect();
                if !flags.is_empty() {
                    eprintln!(
                        "#{:02} {} [{}]",
                        entry.index(),
                        display_path(entry),
                        flags.join(" ")
                    );
                }
            }
        }

        if problems.is_empty() {
            global.logger.info("PATH ok: remaining findings are allowed");
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "PATH check failed: {}",
                problems.join(", ")
            )))
        }
    }
}
