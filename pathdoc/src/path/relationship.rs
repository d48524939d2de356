//! Path relationship checking.
//!
//! This module determines whether one normalized path sits above another in
//! the directory hierarchy. Comparison is component-wise, so `/usr/lib` is
//! not an ancestor of `/usr/libexec`.

use std::path::{Path, PathBuf};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathdoc::path::PathRelationship;
/// use std::path::Path;
///
/// let parent = Path::new("/usr/local");
/// let child = Path::new("/usr/local/bin");
///
/// assert_eq!(
///     PathRelationship::between(parent, child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Trailing separators are ignored; otherwise the paths are compared
    /// exactly as given, without touching the filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathdoc::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/usr/lib"), Path::new("/usr/libexec"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        let p1 = normalize_for_comparison(path1);
        let p2 = normalize_for_comparison(path2);

        if p1 == p2 {
            return Self::Same;
        }

        if p2.starts_with(&p1) {
            return Self::Ancestor;
        }

        if p1.starts_with(&p2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check whether `ancestor` strictly contains `path`.
    ///
    /// Empty strings never take part in the relation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathdoc::path::PathRelationship;
    ///
    /// assert!(PathRelationship::is_strict_ancestor("/opt", "/opt/tool/bin"));
    /// assert!(!PathRelationship::is_strict_ancestor("/opt", "/opt"));
    /// assert!(!PathRelationship::is_strict_ancestor("", "/opt"));
    /// ```
    #[must_use]
    pub fn is_strict_ancestor(ancestor: &str, path: &str) -> bool {
        if ancestor.is_empty() || path.is_empty() {
            return false;
        }
        Self::between(Path::new(ancestor), Path::new(path)) == Self::Ancestor
    }
}

/// Remove a trailing separator (but not from the root).
fn normalize_for_comparison(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();

    if let Some(s) = p.to_str() {
        if s.len() > 1 && (s.ends_with('/') || s.ends_with('\\')) {
            p = PathBuf::from(&s[..s.len() - 1]);
        }
    }

    p
}
