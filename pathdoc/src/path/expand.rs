//! Expansion of environment variables and `~` inside PATH segments.
//!
//! Expansion is purely textual. Nothing here touches the filesystem.

use std::env;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `$NAME` or `${NAME}` references.
static VAR_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\w+|\{[^}]*\})").expect("variable pattern is valid"));

/// Expand `$NAME` and `${NAME}` references using the given lookup.
///
/// References to variables the lookup does not know are left verbatim, so a
/// segment such as `$UNSET/bin` survives expansion unchanged.
///
/// # Examples
///
/// ```
/// use pathdoc::path::expand::expand_vars_with;
///
/// let lookup = |name: &str| (name == "TOOLS").then(|| "/opt/tools".to_string());
/// assert_eq!(expand_vars_with("$TOOLS/bin", lookup), "/opt/tools/bin");
/// assert_eq!(expand_vars_with("${TOOLS}/bin", lookup), "/opt/tools/bin");
/// assert_eq!(expand_vars_with("$NOPE/bin", lookup), "$NOPE/bin");
/// ```
pub fn expand_vars_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !input.contains('$') {
        return input.to_string();
    }

    VAR_REFERENCE
        .replace_all(input, |caps: &Captures<'_>| {
            let name = caps[1].trim_start_matches('{').trim_end_matches('}');
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Expand variable references against the process environment.
#[must_use]
pub fn expand_vars(input: &str) -> String {
    expand_vars_with(input, |name| env::var(name).ok())
}

/// Expand a leading `~` or `~/` to the given home directory.
///
/// `~user` forms are returned unchanged, as is everything when no home
/// directory is known.
///
/// # Examples
///
/// ```
/// use pathdoc::path::expand::expand_tilde_with;
/// use std::path::Path;
///
/// let home = Some(Path::new("/home/ada"));
/// assert_eq!(expand_tilde_with("~", home), "/home/ada");
/// assert_eq!(expand_tilde_with("~/.cargo/bin", home), "/home/ada/.cargo/bin");
/// assert_eq!(expand_tilde_with("~bob/bin", home), "~bob/bin");
/// assert_eq!(expand_tilde_with("/usr/bin", home), "/usr/bin");
/// ```
#[must_use]
pub fn expand_tilde_with(input: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return input.to_string();
    };
    if !input.starts_with('~') {
        return input.to_string();
    }

    let home_str = home.to_string_lossy();
    let trimmed = home_str.trim_end_matches(|c: char| c == '/' || c == '\\');

    if input == "~" {
        if trimmed.is_empty() {
            return home_str.into_owned();
        }
        return trimmed.to_string();
    }

    if input.starts_with("~/") || (cfg!(windows) && input.starts_with("~\\")) {
        return format!("{}{}", trimmed, &input[1..]);
    }

    input.to_string()
}

/// Expand a raw segment: variables first, then the home directory.
#[must_use]
pub fn expand(raw: &str) -> String {
    let home = home::home_dir();
    expand_tilde_with(&expand_vars(raw), home.as_deref())
}
