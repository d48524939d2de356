//! Path normalization functions.
//!
//! This module provides:
//! - Splitting and joining of path-list strings on the platform separator
//! - Lexical normalization (`.` and `..` folding, separator cleanup)
//! - Canonicalization that falls back to the lexical form for missing paths

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Separator between segments of a path-list variable.
pub const SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Split a path-list string into its raw segments.
///
/// An empty string has no segments at all. Otherwise every separator
/// produces a boundary, so empty segments are preserved.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use pathdoc::path::normalize::split_segments;
///
/// assert!(split_segments("").is_empty());
/// assert_eq!(split_segments("/a:/b"), vec!["/a", "/b"]);
/// assert_eq!(split_segments("/a::/b"), vec!["/a", "", "/b"]);
/// # }
/// ```
#[must_use]
pub fn split_segments(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(SEPARATOR).map(str::to_string).collect()
}

/// Join segments back into a path-list string.
#[must_use]
pub fn join_segments<S: AsRef<str>>(parts: &[S]) -> String {
    let mut joined = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(part.as_ref());
    }
    joined
}

/// Normalize a path without consulting the filesystem.
///
/// `.` components are dropped, `..` removes the preceding normal component,
/// and repeated or trailing separators disappear. A `..` that would climb
/// above the root of an absolute path is discarded; in relative paths it is
/// kept. A path that folds to nothing becomes `.`.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use pathdoc::path::normalize::lexical_normalize;
///
/// assert_eq!(lexical_normalize("/a/./b/../c/"), "/a/c");
/// assert_eq!(lexical_normalize("/a/../.."), "/");
/// assert_eq!(lexical_normalize("../x/./y"), "../x/y");
/// assert_eq!(lexical_normalize("a/.."), ".");
/// # }
/// ```
#[must_use]
pub fn lexical_normalize(path: &str) -> String {
    let mut stack: Vec<Component<'_>> = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                stack.push(component);
            }
            Component::CurDir => {
                // "." never changes the location
            }
            Component::ParentDir => match stack.last() {
                Some(Component::Normal(_)) => {
                    stack.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {
                    // Already at root - can't go up further
                }
                _ => stack.push(component),
            },
        }
    }

    if stack.is_empty() {
        return ".".to_string();
    }

    stack
        .iter()
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}

/// Produce the identity key for an expanded segment.
///
/// Existing paths are fully resolved through the filesystem (symlinks
/// followed, made absolute). Paths that do not exist, or cannot be resolved
/// for any reason, fall back to [`lexical_normalize`].
#[must_use]
pub fn canonical_or_lexical(expanded: &str) -> String {
    match fs::canonicalize(expanded) {
        Ok(canonical) => canonical.to_string_lossy().into_owned(),
        Err(e) => {
            log::debug!("falling back to lexical form for '{expanded}': {e}");
            lexical_normalize(expanded)
        }
    }
}

/// Canonicalize an existing path, returning it unchanged when resolution fails.
#[must_use]
pub fn try_canonicalize(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
