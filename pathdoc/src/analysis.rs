//! Duplicate and shadow detection.
//!
//! Both relations only ever point backwards: an entry can be a duplicate of,
//! or be shadowed by, an entry with a strictly smaller index.
//!
//! - **Duplicate**: same normalized value as an earlier entry. The reference
//!   is always the *first* occurrence.
//! - **Shadowed**: an earlier entry's normalized value is a strict ancestor
//!   directory, compared on component boundaries. The first such earlier
//!   entry in index order is reported.
//!
//! Entries with an empty normalized value (empty segments) take part in
//! neither relation.

use std::collections::HashMap;

use crate::path::PathRelationship;

/// Backward references computed for one entry. Indices are 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Relations {
    /// Index of the first entry with the same normalized value.
    pub duplicate_of: Option<usize>,
    /// Index of the first earlier entry that contains this one.
    pub shadowed_by: Option<usize>,
}

/// Relate an ordered list of normalized values.
///
/// The returned vector is parallel to `normalized`. The shadow pass is
/// quadratic in the number of entries, which is fine for PATH-sized input.
///
/// # Examples
///
/// ```
/// use pathdoc::analysis::relate;
///
/// let relations = relate(&["/usr", "/usr/bin", "/usr"]);
/// assert_eq!(relations[1].shadowed_by, Some(1));
/// assert_eq!(relations[2].duplicate_of, Some(1));
/// assert_eq!(relations[0].duplicate_of, None);
/// ```
#[must_use]
pub fn relate<S: AsRef<str>>(normalized: &[S]) -> Vec<Relations> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut relations = vec![Relations::default(); normalized.len()];

    for (pos, value) in normalized.iter().enumerate() {
        let value = value.as_ref();
        if value.is_empty() {
            continue;
        }
        let index = pos + 1;
        match first_seen.get(value) {
            Some(&first) => relations[pos].duplicate_of = Some(first),
            None => {
                first_seen.insert(value, index);
            }
        }
    }

    for (pos, value) in normalized.iter().enumerate() {
        let value = value.as_ref();
        relations[pos].shadowed_by = normalized[..pos]
            .iter()
            .position(|earlier| PathRelationship::is_strict_ancestor(earlier.as_ref(), value))
            .map(|earlier_pos| earlier_pos + 1);
    }

    log::debug!(
        "related {} entries: {} duplicates, {} shadowed",
        normalized.len(),
        relations.iter().filter(|r| r.duplicate_of.is_some()).count(),
        relations.iter().filter(|r| r.shadowed_by.is_some()).count(),
    );

    relations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(relate::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_duplicates_point_at_first_occurrence() {
        let relations = relate(&["/a", "/b", "/a", "/a"]);
        assert_eq!(relations[0].duplicate_of, None);
        assert_eq!(relations[1].duplicate_of, None);
        assert_eq!(relations[2].duplicate_of, Some(1));
        assert_eq!(relations[3].duplicate_of, Some(1));
    }

    #[test]
    fn test_shadow_takes_first_earlier_ancestor() {
        let relations = relate(&["/opt", "/opt/tool", "/opt/tool/bin"]);
        assert_eq!(relations[0].shadowed_by, None);
        assert_eq!(relations[1].shadowed_by, Some(1));
        assert_eq!(relations[2].shadowed_by, Some(1));
    }

    #[test]
    fn test_later_ancestor_does_not_shadow() {
        let relations = relate(&["/opt/tool/bin", "/opt"]);
        assert_eq!(relations[0].shadowed_by, None);
        assert_eq!(relations[1].shadowed_by, None);
    }

    #[test]
    fn test_equal_values_are_not_shadows() {
        let relations = relate(&["/usr/bin", "/usr/bin"]);
        assert_eq!(relations[1].shadowed_by, None);
        assert_eq!(relations[1].duplicate_of, Some(1));
    }

    #[test]
    fn test_component_boundary() {
        let relations = relate(&["/usr/lib", "/usr/libexec"]);
        assert_eq!(relations[1].shadowed_by, None);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let relations = relate(&["", "/usr", "", "/usr/bin"]);
        assert_eq!(relations[2].duplicate_of, None);
        assert_eq!(relations[2].shadowed_by, None);
        assert_eq!(relations[3].shadowed_by, Some(2));
    }

    #[test]
    fn test_duplicate_can_also_be_shadowed() {
        let relations = relate(&["/opt", "/opt/bin", "/opt/bin"]);
        assert_eq!(relations[2].duplicate_of, Some(2));
        assert_eq!(relations[2].shadowed_by, Some(1));
    }
}
