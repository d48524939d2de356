//! Build script for pathdoc-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and repair the PATH search list")
        .long_about(
            "Report broken, duplicate and shadowed PATH entries, classify them, \
             and interactively build a repaired value without changing the environment",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from FILE instead of ~/.pathdoc/config.yaml")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("path-string")
                .long("path-string")
                .help("Analyze STR instead of the PATH environment variable")
                .value_name("STR")
                .global(true),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Print a report of every PATH entry")
                .long_about(
                    "Print the ordered entries, their categories and problems, \
                     as a human report, JSON, CSV or TSV",
                ),
            Command::new("fix")
                .about("Interactively repair broken entries and print the new value")
                .long_about(
                    "Keep, remove, replace or create broken entries one by one, \
                     then print an export line for the proposed value",
                ),
            Command::new("suggest")
                .about("Suggest replacements for one PATH segment")
                .long_about("List existing directories that could replace a broken segment"),
            Command::new("classify")
                .about("Show the category of arbitrary directories")
                .long_about("Run the PATH entry classifier on the given directories"),
            Command::new("check")
                .about("Exit non-zero if the PATH has problems")
                .long_about(
                    "Exit with status 1 when broken, duplicate or shadowed entries exist",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathdoc.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
