//! Suggest command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathdoc::{Config, Suggester};

/// Suggest replacement directories for one PATH segment.
#[derive(Args)]
pub struct SuggestCommand {
    /// The segment, as it would appear in PATH
    #[arg(value_name = "SEGMENT", allow_hyphen_values = true)]
    pub segment: String,

    /// Maximum number of suggestions
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print the suggestions as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl SuggestCommand {
    /// Execute the suggest command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.segment.trim().is_empty() {
            return Err(CliError::InvalidArguments(
                "segment cannot be empty".to_string(),
            ));
        }

        let overrides = Config {
            suggestion_limit: self.limit,
            ..Default::default()
        };
        let config = load_configuration(global, overrides)?;

        let suggestions = Suggester::new().suggest(&self.segment, config.suggestion_limit());

        if self.json {
            let paths: Vec<String> = suggestions
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            let json = serde_json::to_string_pretty(&paths).map_err(pathdoc::Error::from)?;
            println!("{json}");
        } else if suggestions.is_empty() {
            global
                .logger
                .info(&format!("No suggestions for {}", self.segment));
        } else {
            for path in &suggestions {
                println!("{}", path.display());
            }
        }

        Ok(())
    }
}
