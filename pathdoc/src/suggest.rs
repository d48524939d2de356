//! Replacement suggestions for broken entries.
//!
//! The heuristics only look at directories that already exist near the
//! broken path, so every suggestion is a real directory at the time it is
//! produced. Discovery order is the only ranking.
//!
//! 1. Expand and lexically normalize the segment.
//! 2. Walk up to the nearest existing directory.
//! 3. Look at that directory's subdirectories, sorted by name:
//!    - *leaf rule*: the child's name equals, starts with, or is a prefix of
//!      the broken path's last component;
//!    - *version-bump rule*: when the first missing component contains a
//!      digit, a child with the same digit skeleton (`1.2` and `1.3` are both
//!      `#.#`) is used if the rest of the missing path exists below it.
//! 4. When the last component is `bin` or `sbin`, look for `bin` and `sbin`
//!    directories in up to four ancestors of the broken path's parent.
//!
//! Results are canonicalized, deduplicated and cut to the requested limit.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::path::expand::expand;
use crate::path::normalize::{lexical_normalize, try_canonicalize};

/// Executable directory names that trigger the nearby-bin search.
const BIN_DIRS: [&str; 2] = ["bin", "sbin"];

/// Number of ancestor levels inspected by the nearby-bin search.
const BIN_SEARCH_LEVELS: usize = 4;

/// Produces candidate replacements for a broken segment.
///
/// # Examples
///
/// ```
/// use pathdoc::suggest::Suggester;
/// use std::fs;
///
/// let root = tempfile::tempdir().unwrap();
/// fs::create_dir_all(root.path().join("tool/1.3/bin")).unwrap();
///
/// let broken = root.path().join("tool/1.2/bin");
/// let found = Suggester::new().suggest(&broken.to_string_lossy(), 8);
///
/// let expected = fs::canonicalize(root.path().join("tool/1.3/bin")).unwrap();
/// assert!(found.contains(&expected));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Suggester;

impl Suggester {
    /// Create a suggester.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Suggest up to `limit` existing directories that could replace `raw`.
    #[must_use]
    pub fn suggest(&self, raw: &str, limit: usize) -> Vec<PathBuf> {
        let expanded = expand(raw);
        if expanded.trim().is_empty() || limit == 0 {
            return Vec::new();
        }
        let target = PathBuf::from(lexical_normalize(&expanded));

        let mut found = Candidates::new(limit);

        if let Some(ancestor) = nearest_existing_dir(&target) {
            let children = sorted_subdirectories(ancestor);
            let missing = target.strip_prefix(ancestor).unwrap_or(target.as_path());

            if let Some(leaf) = target.file_name() {
                let leaf = leaf.to_string_lossy();
                for child in &children {
                    if leaf_matches(&leaf, &child.to_string_lossy()) {
                        found.push(&ancestor.join(child));
                    }
                }
            }

            let mut tail = missing.components();
            if let Some(first_missing) = tail.next() {
                let first_missing = first_missing.as_os_str().to_string_lossy();
                let rest = tail.as_path();
                if first_missing.chars().any(|c| c.is_ascii_digit()) {
                    let skeleton = digit_skeleton(&first_missing);
                    for child in &children {
                        let name = child.to_string_lossy();
                        if name != first_missing && digit_skeleton(&name) == skeleton {
                            let candidate = ancestor.join(child).join(rest);
                            if candidate.is_dir() {
                                found.push(&candidate);
                            }
                        }
                    }
                }
            }
        }

        let is_bin_leaf = target
            .file_name()
            .is_some_and(|leaf| BIN_DIRS.iter().any(|bin| leaf == *bin));
        if is_bin_leaf {
            let levels = target
                .parent()
                .into_iter()
                .flat_map(Path::ancestors)
                .map(or_current_dir)
                .take(BIN_SEARCH_LEVELS);
            for level in levels {
                if !level.is_dir() {
                    continue;
                }
                for bin in BIN_DIRS {
                    let candidate = level.join(bin);
                    if candidate.is_dir() {
                        found.push(&candidate);
                    }
                }
            }
        }

        log::debug!("{} suggestion(s) for '{raw}'", found.items.len());
        found.items
    }
}

/// Ordered, deduplicated, size-capped candidate list.
struct Candidates {
    items: Vec<PathBuf>,
    limit: usize,
}

impl Candidates {
    fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    fn push(&mut self, path: &Path) {
        if self.items.len() >= self.limit {
            return;
        }
        let resolved = try_canonicalize(path);
        if !self.items.contains(&resolved) {
            self.items.push(resolved);
        }
    }
}

/// The path itself or its closest ancestor that is an existing directory.
///
/// A relative path ends its walk at the current directory.
fn nearest_existing_dir(path: &Path) -> Option<&Path> {
    path.ancestors().map(or_current_dir).find(|p| p.is_dir())
}

/// The empty last ancestor of a relative path stands for `.`.
fn or_current_dir(path: &Path) -> &Path {
    if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    }
}

/// Names of the subdirectories of `dir`, sorted. Unreadable directories
/// have no children.
fn sorted_subdirectories(dir: &Path) -> Vec<OsString> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("cannot list {}: {e}", dir.display());
            return Vec::new();
        }
    };
    let mut names: Vec<OsString> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name())
        .collect();
    names.sort();
    names
}

fn leaf_matches(leaf: &str, name: &str) -> bool {
    !leaf.is_empty() && (name == leaf || name.starts_with(leaf) || leaf.starts_with(name))
}

/// Replace every run of ASCII digits with a single `#`.
fn digit_skeleton(name: &str) -> String {
    let mut skeleton = String::with_capacity(name.len());
    let mut in_digits = false;
    for c in name.chars() {
        if c.is_ascii_digit() {
            if !in_digits {
                skeleton.push('#');
            }
            in_digits = true;
        } else {
            skeleton.push(c);
            in_digits = false;
        }
    }
    skeleton
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn tree(dirs: &[&str]) -> TempDir {
        let root = tempdir().unwrap();
        for dir in dirs {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        root
    }

    fn canon(root: &TempDir, rel: &str) -> PathBuf {
        fs::canonicalize(root.path().join(rel)).unwrap()
    }

    fn suggest(root: &TempDir, rel: &str, limit: usize) -> Vec<PathBuf> {
        Suggester::new().suggest(&root.path().join(rel).to_string_lossy(), limit)
    }

    #[test]
    fn test_digit_skeleton() {
        assert_eq!(digit_skeleton("1.2"), "#.#");
        assert_eq!(digit_skeleton("1.23.4"), "#.#.#");
        assert_eq!(digit_skeleton("v20"), "v#");
        assert_eq!(digit_skeleton("bin"), "bin");
    }

    #[test]
    fn test_leaf_matches() {
        assert!(leaf_matches("python3", "python3"));
        assert!(leaf_matches("python3", "python3.12"));
        assert!(leaf_matches("python3.12", "python3"));
        assert!(!leaf_matches("python3", "ruby"));
        assert!(!leaf_matches("", "anything"));
    }

    #[test]
    fn test_empty_input() {
        assert!(Suggester::new().suggest("", 8).is_empty());
        assert!(Suggester::new().suggest("   ", 8).is_empty());
    }

    #[test]
    fn test_version_bump_in_middle_component() {
        let root = tree(&["toolX/1.3/bin"]);
        let found = suggest(&root, "toolX/1.2/bin", 8);
        assert_eq!(found.first(), Some(&canon(&root, "toolX/1.3/bin")));
    }

    #[test]
    fn test_version_bump_requires_rest_of_path() {
        let root = tree(&["toolX/1.3/lib"]);
        let found = suggest(&root, "toolX/1.2/bin", 8);
        assert!(!found.contains(&root.path().join("toolX/1.3/bin")));
        assert!(found.iter().all(|p| p.is_dir()));
    }

    #[test]
    fn test_leaf_rule_on_sibling_names() {
        let root = tree(&["lib/python3.11", "lib/python3.12", "lib/ruby"]);
        let found = suggest(&root, "lib/python3", 8);
        assert_eq!(
            found,
            vec![canon(&root, "lib/python3.11"), canon(&root, "lib/python3.12")]
        );
    }

    #[test]
    fn test_leaf_candidates_precede_bin_candidates() {
        let root = tree(&["pkg/binaries", "pkg/bin2", "bin"]);
        let found = suggest(&root, "pkg/bin", 8);
        let bin2 = canon(&root, "pkg/bin2");
        let binaries = canon(&root, "pkg/binaries");
        let nearby = canon(&root, "bin");
        assert_eq!(&found[..2], &[bin2, binaries]);
        assert!(found.contains(&nearby));
    }

    #[test]
    fn test_bin_search_walks_up() {
        let root = tree(&["a/sbin", "a/b/c"]);
        let found = suggest(&root, "a/b/c/d/bin", 8);
        assert!(found.contains(&canon(&root, "a/sbin")));
    }

    #[test]
    fn test_results_are_deduplicated() {
        let root = tree(&["app/bin"]);
        // Found by the leaf rule and again by the nearby-bin search
        let found = suggest(&root, "app/missing/bin", 8);
        let bin = canon(&root, "app/bin");
        assert_eq!(found.iter().filter(|p| **p == bin).count(), 1);
    }

    #[test]
    fn test_limit_is_respected() {
        let root = tree(&["v/tool1", "v/tool2", "v/tool3", "v/tool4"]);
        assert_eq!(suggest(&root, "v/tool", 2).len(), 2);
        assert!(suggest(&root, "v/tool", 0).is_empty());
    }

    #[test]
    fn test_relative_segment_searches_current_dir() {
        // Unit tests run from the package root, which holds `src/`
        let found = Suggester::new().suggest("srcx", 8);
        assert!(found.contains(&fs::canonicalize("src").unwrap()));
        assert!(found.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_or_current_dir() {
        assert_eq!(or_current_dir(Path::new("")), Path::new("."));
        assert_eq!(or_current_dir(Path::new("a/b")), Path::new("a/b"));
        assert_eq!(
            nearest_existing_dir(Path::new("no-such-dir/bin")),
            Some(Path::new("."))
        );
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let root = tree(&["data/alpha"]);
        assert!(suggest(&root, "data/zeta", 8).is_empty());
    }

    #[test]
    fn test_results_are_sorted_by_name() {
        let root = tree(&["opt/node-b", "opt/node-a", "opt/node-c"]);
        let found = suggest(&root, "opt/node", 8);
        assert_eq!(
            found,
            vec![
                canon(&root, "opt/node-a"),
                canon(&root, "opt/node-b"),
                canon(&root, "opt/node-c")
            ]
        );
    }
}
