//! Snapshots of a path-list string.
//!
//! A [`Snapshot`] is an immutable, fully analyzed view of one PATH value:
//! one [`PathEntry`] per segment, a grouping by [`Category`], and a
//! [`Summary`] of the problems found. Snapshots are cheap to throw away;
//! the fix session rebuilds one before every action instead of patching an
//! old one.
//!
//! # Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use pathdoc::snapshot::SnapshotBuilder;
//!
//! let snapshot = SnapshotBuilder::new().build("/nonexistent/a::/nonexistent/a");
//! assert_eq!(snapshot.len(), 3);
//! assert_eq!(snapshot.summary().broken, vec![1, 2, 3]);
//! assert_eq!(snapshot.entries()[2].duplicate_of(), Some(1));
//! # }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;

use serde::{Serialize, Serializer};

use crate::analysis::{self, Relations};
use crate::classify::{Category, Classifier};
use crate::path::expand::expand;
use crate::path::normalize::{canonical_or_lexical, join_segments, split_segments};

/// Reason recorded for empty segments.
pub const EMPTY_SEGMENT_REASON: &str = "empty segment";

/// One analyzed segment of a path-list string.
///
/// Entries are immutable; every snapshot builds new ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    index: usize,
    raw: String,
    expanded: String,
    normalized: String,
    exists: bool,
    is_dir: bool,
    category: Category,
    reason: String,
    duplicate_of: Option<usize>,
    shadowed_by: Option<usize>,
}

impl PathEntry {
    /// 1-based position in the snapshot.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The segment exactly as it appeared.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The segment after variable and tilde expansion.
    #[must_use]
    pub fn expanded(&self) -> &str {
        &self.expanded
    }

    /// Identity key used for duplicate and shadow detection.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether anything exists at the expanded path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Whether the expanded path is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Classifier category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Classifier reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Index of the first entry with the same normalized path.
    #[must_use]
    pub fn duplicate_of(&self) -> Option<usize> {
        self.duplicate_of
    }

    /// Index of the first earlier entry that contains this one.
    #[must_use]
    pub fn shadowed_by(&self) -> Option<usize> {
        self.shadowed_by
    }

    /// True when the entry does not resolve to an existing directory.
    #[must_use]
    pub fn is_broken(&self) -> bool {
        !self.exists || !self.is_dir
    }

    /// True for a segment that names no directory once expanded, such as
    /// `""` or a variable set to an empty value.
    #[must_use]
    pub fn is_empty_segment(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Derived flags, in display order.
    #[must_use]
    pub fn flags(&self) -> Vec<Flag> {
        let mut flags = Vec::new();
        if self.is_broken() {
            flags.push(Flag::Broken);
        }
        if let Some(first) = self.duplicate_of {
            flags.push(Flag::Duplicate(first));
        }
        if let Some(ancestor) = self.shadowed_by {
            flags.push(Flag::Shadow(ancestor));
        }
        flags
    }
}

/// A problem marker on an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Missing or not a directory.
    Broken,
    /// Duplicate of the given entry.
    Duplicate(usize),
    /// Shadowed by the given entry.
    Shadow(usize),
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Broken => f.write_str("BROKEN"),
            Self::Duplicate(index) => write!(f, "DUP({index:02})"),
            Self::Shadow(index) => write!(f, "SHADOW({index:02})"),
        }
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Indices of the entries carrying each kind of problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of entries.
    pub total_entries: usize,
    /// Broken entries.
    pub broken: Vec<usize>,
    /// Entries that duplicate an earlier one.
    pub duplicates: Vec<usize>,
    /// Entries shadowed by an earlier one.
    pub shadowed: Vec<usize>,
}

impl Summary {
    fn from_entries(entries: &[PathEntry]) -> Self {
        let collect = |pred: fn(&PathEntry) -> bool| {
            entries
                .iter()
                .filter(|e| pred(e))
                .map(PathEntry::index)
                .collect()
        };
        Self {
            total_entries: entries.len(),
            broken: collect(PathEntry::is_broken),
            duplicates: collect(|e| e.duplicate_of.is_some()),
            shadowed: collect(|e| e.shadowed_by.is_some()),
        }
    }

    /// True when nothing is broken, duplicated or shadowed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty() && self.duplicates.is_empty() && self.shadowed.is_empty()
    }
}

/// An analyzed path-list string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    raw: String,
    entries: Vec<PathEntry>,
    groups: BTreeMap<Category, Vec<usize>>,
    summary: Summary,
}

impl Snapshot {
    /// The string this snapshot was built from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Entries in segment order.
    #[must_use]
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    /// Look up an entry by its 1-based index.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&PathEntry> {
        index.checked_sub(1).and_then(|pos| self.entries.get(pos))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the snapshot has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry indices grouped by category, in category priority order.
    ///
    /// Within a category the indices keep segment order. Categories with no
    /// entries are absent.
    #[must_use]
    pub fn groups(&self) -> &BTreeMap<Category, Vec<usize>> {
        &self.groups
    }

    /// Entries of one category.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &PathEntry> {
        self.groups
            .get(&category)
            .into_iter()
            .flatten()
            .filter_map(|&index| self.entry(index))
    }

    /// Broken entries in segment order.
    pub fn broken(&self) -> impl Iterator<Item = &PathEntry> {
        self.entries.iter().filter(|e| e.is_broken())
    }

    /// Number of broken entries.
    #[must_use]
    pub fn broken_count(&self) -> usize {
        self.summary.broken.len()
    }

    /// Problem summary.
    #[must_use]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// Builds [`Snapshot`]s.
///
/// The builder only reads the filesystem (`metadata` and `canonicalize`);
/// it never consults or changes the process environment's `PATH`.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    classifier: Classifier,
}

impl SnapshotBuilder {
    /// Create a builder using the current user's home directory for
    /// classification.
    #[must_use]
    pub fn new() -> Self {
        Self::with_classifier(Classifier::new())
    }

    /// Create a builder with a specific classifier.
    #[must_use]
    pub fn with_classifier(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Analyze a path-list string.
    ///
    /// An empty string yields an empty snapshot. Empty segments anywhere
    /// else are kept as broken entries.
    #[must_use]
    pub fn build(&self, raw: &str) -> Snapshot {
        let segments = split_segments(raw);
        self.assemble(raw.to_string(), &segments)
    }

    /// Analyze an already split list of segments.
    ///
    /// Unlike [`build`](Self::build), a single empty segment yields one
    /// (broken) entry rather than none.
    #[must_use]
    pub fn from_segments<S: AsRef<str>>(&self, segments: &[S]) -> Snapshot {
        self.assemble(join_segments(segments), segments)
    }

    fn assemble<S: AsRef<str>>(&self, raw: String, segments: &[S]) -> Snapshot {
        let probes: Vec<Probe> = segments.iter().map(|s| self.probe(s.as_ref())).collect();
        let normalized: Vec<&str> = probes.iter().map(|p| p.normalized.as_str()).collect();
        let relations = analysis::relate(&normalized);

        let entries: Vec<PathEntry> = probes
            .into_iter()
            .zip(relations)
            .enumerate()
            .map(|(pos, (probe, Relations { duplicate_of, shadowed_by }))| PathEntry {
                index: pos + 1,
                raw: probe.raw,
                expanded: probe.expanded,
                normalized: probe.normalized,
                exists: probe.exists,
                is_dir: probe.is_dir,
                category: probe.category,
                reason: probe.reason,
                duplicate_of,
                shadowed_by,
            })
            .collect();

        let mut groups: BTreeMap<Category, Vec<usize>> = BTreeMap::new();
        for entry in &entries {
            groups.entry(entry.category).or_default().push(entry.index);
        }

        let summary = Summary::from_entries(&entries);
        log::debug!(
            "built snapshot: {} entries, {} broken",
            summary.total_entries,
            summary.broken.len()
        );

        Snapshot {
            raw,
            entries,
            groups,
            summary,
        }
    }

    fn probe(&self, raw: &str) -> Probe {
        let expanded = expand(raw);
        if expanded.is_empty() {
            return Probe {
                raw: raw.to_string(),
                expanded,
                normalized: String::new(),
                exists: false,
                is_dir: false,
                category: Category::Unknown,
                reason: EMPTY_SEGMENT_REASON.to_string(),
            };
        }

        let (exists, is_dir) = match fs::metadata(&expanded) {
            Ok(meta) => (true, meta.is_dir()),
            Err(e) => {
                log::debug!("treating '{expanded}' as missing: {e}");
                (false, false)
            }
        };
        let normalized = canonical_or_lexical(&expanded);
        let classification = self.classifier.classify(&normalized);

        Probe {
            raw: raw.to_string(),
            expanded,
            normalized,
            exists,
            is_dir,
            category: classification.category(),
            reason: classification.reason().to_string(),
        }
    }
}

/// Per-segment facts gathered before relations are known.
struct Probe {
    raw: String,
    expanded: String,
    normalized: String,
    exists: bool,
    is_dir: bool,
    category: Category,
    reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn builder() -> SnapshotBuilder {
        SnapshotBuilder::with_classifier(Classifier::with_home(None))
    }

    fn s(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_empty_string_has_no_entries() {
        let snapshot = builder().build("");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.summary().total_entries, 0);
        assert!(snapshot.groups().is_empty());
    }

    #[test]
    fn test_single_empty_segment_from_segments() {
        let snapshot = builder().from_segments(&[""]);
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.entries()[0].is_broken());
        assert_eq!(snapshot.entries()[0].reason(), EMPTY_SEGMENT_REASON);
    }

    #[test]
    fn test_existing_and_missing_entries() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let snapshot = builder().from_segments(&[s(dir.path()), s(&missing)]);

        let first = &snapshot.entries()[0];
        assert!(first.exists());
        assert!(first.is_dir());
        assert!(!first.is_broken());
        assert!(first.flags().is_empty());

        let second = &snapshot.entries()[1];
        assert!(!second.exists());
        assert!(second.is_broken());
        assert_eq!(second.flags(), vec![Flag::Broken]);
        assert_eq!(snapshot.summary().broken, vec![2]);
    }

    #[test]
    fn test_file_is_broken() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tool");
        fs::write(&file, "#!/bin/sh\n").unwrap();

        let snapshot = builder().from_segments(&[s(&file)]);
        let entry = &snapshot.entries()[0];
        assert!(entry.exists());
        assert!(!entry.is_dir());
        assert!(entry.is_broken());
    }

    #[test]
    #[cfg(unix)]
    fn test_empty_segments_are_entries() {
        let snapshot = builder().build("/nonexistent/a::/nonexistent/b:");
        assert_eq!(snapshot.len(), 4);
        let empty = &snapshot.entries()[1];
        assert!(empty.is_empty_segment());
        assert!(empty.is_broken());
        assert_eq!(empty.normalized(), "");
        assert_eq!(empty.duplicate_of(), None);
        // The trailing empty segment is not a duplicate of the middle one
        assert_eq!(snapshot.entries()[3].duplicate_of(), None);
    }

    #[test]
    fn test_duplicate_via_trailing_separator() {
        let dir = tempdir().unwrap();
        let with_slash = format!("{}/", s(dir.path()));
        let snapshot = builder().from_segments(&[s(dir.path()), with_slash]);
        assert_eq!(snapshot.entries()[1].duplicate_of(), Some(1));
        assert_eq!(snapshot.entries()[1].flags(), vec![Flag::Duplicate(1)]);
    }

    #[test]
    fn test_shadow_relation() {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();

        let snapshot = builder().from_segments(&[s(dir.path()), s(&bin)]);
        assert_eq!(snapshot.entries()[1].shadowed_by(), Some(1));
        assert_eq!(snapshot.summary().shadowed, vec![2]);
    }

    #[test]
    fn test_groups_follow_category_order() {
        let snapshot = builder().from_segments(&[
            "/nonexistent/toolbin",
            "/opt/homebrew/bin",
            "/usr/bin",
            "/opt/homebrew/sbin",
        ]);
        let order: Vec<Category> = snapshot.groups().keys().copied().collect();
        assert_eq!(
            order,
            vec![Category::System, Category::Homebrew, Category::Unknown]
        );
        assert_eq!(snapshot.groups()[&Category::Homebrew], vec![2, 4]);
        assert_eq!(snapshot.in_category(Category::System).count(), 1);
    }

    #[test]
    fn test_entry_lookup() {
        let snapshot = builder().from_segments(&["/a", "/b"]);
        assert_eq!(snapshot.entry(2).map(PathEntry::raw), Some("/b"));
        assert!(snapshot.entry(0).is_none());
        assert!(snapshot.entry(3).is_none());
    }

    #[test]
    fn test_flag_display() {
        assert_eq!(Flag::Broken.to_string(), "BROKEN");
        assert_eq!(Flag::Duplicate(3).to_string(), "DUP(03)");
        assert_eq!(Flag::Shadow(12).to_string(), "SHADOW(12)");
    }

    #[test]
    #[cfg(unix)]
    fn test_raw_is_preserved() {
        let raw = "/nonexistent/a:/nonexistent/b";
        assert_eq!(builder().build(raw).raw(), raw);
    }

    #[test]
    fn test_summary_is_clean() {
        let dir = tempdir().unwrap();
        let snapshot = builder().from_segments(&[s(dir.path())]);
        assert!(snapshot.summary().is_clean());
    }
}
