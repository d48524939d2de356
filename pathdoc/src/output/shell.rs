//! Shell detection and export formatting.

use std::env;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    #[default]
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell", alias = "pwsh")]
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        if env::var_os("ZSH_VERSION").is_some() {
            return Self::Zsh;
        }
        if env::var_os("FISH_VERSION").is_some() {
            return Self::Fish;
        }
        if env::var_os("PSModulePath").is_some() {
            return Self::PowerShell;
        }

        env::var("SHELL")
            .ok()
            .and_then(|shell| Self::from_string(shell.rsplit(['/', '\\']).next()?).ok())
            .unwrap_or_default()
    }

    /// Parse a shell type from a string.
    ///
    /// Accepts `bash`, `sh`, `zsh`, `fish`, `powershell`, `pwsh`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(crate::Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }

    /// Format an assignment that exports `var` with `value`.
    ///
    /// The value is always double-quoted, with the characters that stay
    /// special inside double quotes escaped for the target shell.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathdoc::output::ShellType;
    ///
    /// assert_eq!(
    ///     ShellType::Bash.format_export("PATH", "/usr/bin:/opt/$x"),
    ///     r#"export PATH="/usr/bin:/opt/\$x""#
    /// );
    /// assert_eq!(ShellType::Fish.format_export("PATH", "/usr/bin"), r#"set -gx PATH "/usr/bin""#);
    /// assert_eq!(ShellType::PowerShell.format_export("PATH", "C:\\bin"), r#"$env:PATH="C:\bin""#);
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => {
                format!("export {var}=\"{}\"", escape(value, '\\', &['"', '\\', '$', '`']))
            }
            Self::Fish => format!("set -gx {var} \"{}\"", escape(value, '\\', &['"', '\\', '$'])),
            Self::PowerShell => format!("$env:{var}=\"{}\"", escape(value, '`', &['"', '`', '$'])),
        }
    }

    /// Export line for a proposed `PATH` value.
    #[must_use]
    pub fn path_export(&self, value: &str) -> String {
        self.format_export("PATH", value)
    }

    /// Profile file where the export line usually belongs.
    #[must_use]
    pub fn profile_hint(&self) -> &'static str {
        match self {
            Self::Bash => "~/.bashrc",
            Self::Zsh => "~/.zshrc",
            Self::Fish => "~/.config/fish/config.fish",
            Self::PowerShell => "$PROFILE",
        }
    }
}

fn escape(value: &str, escape_char: char, special: &[char]) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if special.contains(&c) {
            escaped.push(escape_char);
        }
        escaped.push(c);
    }
    escaped
}
