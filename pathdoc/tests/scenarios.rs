//! End-to-end scenarios over the snapshot builder, the suggester and the
//! fix session.

mod common;

use common::{path_of, PathFixture};
use pathdoc::audit::MemorySink;
use pathdoc::{Category, Flag, FixSession, SnapshotBuilder, Suggester};

/// A repeated system directory followed by a missing one.
#[cfg(unix)]
#[test]
fn duplicate_system_dir_and_missing_tool_dir() {
    let snapshot = SnapshotBuilder::new().build("/usr/bin:/usr/bin:/nonexistent/toolbin");
    let entries = snapshot.entries();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].duplicate_of(), Some(1));
    assert!(!entries[2].exists());
    assert_eq!(entries[2].category(), Category::Unknown);
    assert_eq!(entries[2].reason(), "no match");
    assert_eq!(snapshot.broken_count(), 1);
    assert_eq!(entries[2].flags(), vec![Flag::Broken]);
}

/// Two Homebrew directories where neither contains the other.
#[cfg(unix)]
#[test]
fn homebrew_dirs_are_not_related() {
    let snapshot =
        SnapshotBuilder::new().build("/opt/homebrew/bin:/opt/homebrew/Cellar/foo/1.0/bin");

    for entry in snapshot.entries() {
        assert_eq!(entry.category(), Category::Homebrew);
        assert_eq!(entry.shadowed_by(), None);
        assert_eq!(entry.duplicate_of(), None);
    }
    assert!(snapshot.summary().duplicates.is_empty());
    assert!(snapshot.summary().shadowed.is_empty());
}

/// A versioned install directory that was bumped to a new release.
#[test]
fn version_bump_is_suggested() {
    let fx = PathFixture::new();
    let current = fx.dir("opt/toolX/1.3/bin");
    let stale = fx.root().join("opt/toolX/1.2/bin");

    let suggestions = Suggester::new().suggest(&stale.to_string_lossy(), 8);

    assert_eq!(
        suggestions.first().map(|p| p.to_string_lossy().into_owned()),
        Some(current)
    );
}

/// Unrelated siblings with a different digit layout are not offered.
#[test]
fn version_bump_needs_matching_digit_layout() {
    let fx = PathFixture::new();
    fx.dir("opt/toolX/2024-01/bin");
    let stale = fx.root().join("opt/toolX/1.2/bin");

    let suggestions = Suggester::new().suggest(&stale.to_string_lossy(), 8);

    assert!(suggestions
        .iter()
        .all(|p| !p.to_string_lossy().contains("2024-01")));
}

/// Removing one of three broken entries, then previewing.
#[test]
fn remove_then_preview() {
    let fx = PathFixture::new();
    let (a, b, c) = (fx.missing("a"), fx.missing("b"), fx.missing("c"));
    let mut log = MemorySink::new();
    let mut session = FixSession::new(&path_of(&[&a, &b, &c]), &mut log);

    let before = session.preview().broken;
    let second = session.locate(2).unwrap();
    let removed = session.remove(&second).unwrap();
    let after = session.preview();

    assert_eq!(removed, b);
    assert_eq!(before, 3);
    assert_eq!(after.broken, before - 1);
    assert_eq!(after.proposed, path_of(&[&a, &c]));
    assert!(!after.proposed.contains(&b));

    drop(session);
    assert_eq!(log.tags(), vec!["PREVIEW", "REMOVE", "PREVIEW"]);
}
