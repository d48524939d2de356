//! Classify command implementation.
//!
//! Runs the classifier on arbitrary directories. Each argument is treated
//! like a PATH segment: expanded, normalized, then classified.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathdoc::SnapshotBuilder;
use serde::Serialize;

/// Show the category of arbitrary directories.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Directories to classify
    #[arg(value_name = "DIR", required = true, allow_hyphen_values = true)]
    pub paths: Vec<String>,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Classified<'a> {
    path: &'a str,
    normalized: &'a str,
    category: &'static str,
    reason: &'a str,
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let snapshot = SnapshotBuilder::new().from_segments(&self.paths);
        let rows: Vec<Classified<'_>> = snapshot
            .entries()
            .iter()
            .map(|entry| Classified {
                path: entry.raw(),
                normalized: entry.normalized(),
                category: entry.category().label(),
                reason: entry.reason(),
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&rows).map_err(pathdoc::Error::from)?;
            println!("{json}");
        } else {
            for row in &rows {
                println!("{}\t{}\t{}", row.path, row.category, row.reason);
            }
        }

        Ok(())
    }
}
