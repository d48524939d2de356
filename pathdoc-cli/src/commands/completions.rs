//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pathdoc";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            eprintln!("# Run the following command to enable completions:");

            match self.shell {
                Shell::Bash => {
                    eprintln!(
                        "#   pathdoc completions bash > ~/.local/share/bash-completion/completions/pathdoc"
                    );
                    eprintln!("# Or source it directly in ~/.bashrc:");
                    eprintln!("#   eval \"$(pathdoc completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("#   pathdoc completions zsh > ~/.zsh/completions/_pathdoc");
                    eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                }
                Shell::Fish => {
                    eprintln!(
                        "#   pathdoc completions fish > ~/.config/fish/completions/pathdoc.fish"
                    );
                }
                Shell::PowerShell => {
                    eprintln!("#   pathdoc completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }

            eprintln!();
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
