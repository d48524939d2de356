//! Main entry point for the pathdoc CLI.
//!
//! - `inspect`: Print a report of every PATH entry
//! - `fix`: Interactively repair broken entries
//! - `suggest`: Suggest replacements for one segment
//! - `classify`: Show the category of directories
//! - `check`: Exit non-zero if the PATH has problems

mod cli;
mod commands;
mod error;
mod prompt;
mod tabular;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = pathdoc::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        quiet: logger.level() == pathdoc::LogLevel::Quiet,
        config: cli.config,
        path_string: cli.path_string,
        logger,
    };

    let result = match cli.command {
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Fix(cmd) => cmd.execute(&global),
        cli::Command::Suggest(cmd) => cmd.execute(&global),
        cli::Command::Classify(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
