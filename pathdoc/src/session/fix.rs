//! The fix session core.
//!
//! [`FixSession`] owns the list of raw segments being edited. Every
//! operation that looks at entries builds a fresh [`Snapshot`] from that
//! list first, and every mutation checks that the entry it was handed still
//! matches the segment at its position. An entry from an older snapshot is
//! rejected with [`Error::StaleEntry`] instead of being applied to whatever
//! has moved into its slot.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audit::{ActionSink, FixAction};
use crate::config::DEFAULT_SUGGESTION_LIMIT;
use crate::error::{Error, Result};
use crate::output::ShellType;
use crate::path::expand::expand;
use crate::path::normalize::{canonical_or_lexical, join_segments, split_segments};
use crate::snapshot::{PathEntry, Snapshot, SnapshotBuilder};
use crate::suggest::Suggester;

/// Result of a preview.
#[derive(Debug, Clone)]
pub struct Preview {
    /// The joined segments.
    pub proposed: String,
    /// Broken entries in the proposed value.
    pub broken: usize,
    /// The snapshot the count came from.
    pub snapshot: Snapshot,
}

/// What a finished session hands back.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// The proposed PATH value. It is never applied automatically.
    pub proposed: String,
    /// A fresh snapshot of the proposed value.
    pub snapshot: Snapshot,
}

/// An editing session over the segments of one PATH value.
///
/// The session never reads or writes the process environment.
pub struct FixSession<'s> {
    parts: Vec<String>,
    builder: SnapshotBuilder,
    suggester: Suggester,
    suggestion_limit: usize,
    shell: ShellType,
    sink: &'s mut dyn ActionSink,
}

impl<'s> FixSession<'s> {
    /// Start a session on a path-list string.
    pub fn new(raw: &str, sink: &'s mut dyn ActionSink) -> Self {
        Self::from_parts(split_segments(raw), sink)
    }

    /// Start a session on already split segments.
    pub fn from_parts(parts: Vec<String>, sink: &'s mut dyn ActionSink) -> Self {
        Self {
            parts,
            builder: SnapshotBuilder::new(),
            suggester: Suggester::new(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            shell: ShellType::default(),
            sink,
        }
    }

    /// Use a specific snapshot builder.
    #[must_use]
    pub fn with_builder(mut self, builder: SnapshotBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Cap the number of suggestions per entry.
    #[must_use]
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    /// Shell used for export lines in previews.
    #[must_use]
    pub fn with_shell(mut self, shell: ShellType) -> Self {
        self.shell = shell;
        self
    }

    /// The shell used for export lines.
    #[must_use]
    pub fn shell(&self) -> ShellType {
        self.shell
    }

    /// The segments as currently edited.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The segments joined with the platform separator.
    #[must_use]
    pub fn proposed(&self) -> String {
        join_segments(&self.parts)
    }

    /// Analyze the current segments.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.builder.from_segments(&self.parts)
    }

    /// Broken entries of a fresh snapshot.
    #[must_use]
    pub fn broken(&self) -> Vec<PathEntry> {
        self.snapshot().broken().cloned().collect()
    }

    /// Rebuild, then find the broken entry at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::EntryNotFound`] if there is no such entry and
    /// [`Error::EntryNotBroken`] if it resolves to an existing directory.
    pub fn locate(&self, index: usize) -> Result<PathEntry> {
        let snapshot = self.snapshot();
        let entry = snapshot
            .entry(index)
            .ok_or(Error::EntryNotFound { index })?;
        if !entry.is_broken() {
            return Err(Error::EntryNotBroken { index });
        }
        Ok(entry.clone())
    }

    /// Record an action.
    pub fn record(&mut self, action: FixAction) {
        self.sink.record(&action);
    }

    /// Position of `entry` in `parts`, if it is still there.
    fn position_of(&mut self, entry: &PathEntry) -> Result<usize> {
        let index = entry.index();
        let current = index
            .checked_sub(1)
            .filter(|&pos| self.parts.get(pos).is_some_and(|part| part == entry.raw()));
        if let Some(pos) = current {
            return Ok(pos);
        }
        self.record(FixAction::StaleEntry { index });
        Err(Error::StaleEntry {
            index,
            expected: entry.raw().to_string(),
        })
    }

    /// Leave the entry alone.
    ///
    /// # Errors
    ///
    /// [`Error::StaleEntry`] if the entry no longer matches.
    pub fn keep(&mut self, entry: &PathEntry) -> Result<()> {
        self.position_of(entry)?;
        self.record(FixAction::Keep {
            index: entry.index(),
            normalized: entry.normalized().to_string(),
        });
        Ok(())
    }

    /// Drop the entry, returning its raw text.
    ///
    /// # Errors
    ///
    /// [`Error::StaleEntry`] if the entry no longer matches.
    pub fn remove(&mut self, entry: &PathEntry) -> Result<String> {
        let pos = self.position_of(entry)?;
        self.record(FixAction::Remove {
            index: entry.index(),
            normalized: entry.normalized().to_string(),
        });
        Ok(self.parts.remove(pos))
    }

    /// Replace the entry with a typed directory.
    ///
    /// The typed text goes into the segment list verbatim; it is expanded
    /// only to check the target. When the target is missing and
    /// `create_missing` is set, it is created first. Returns the resolved
    /// replacement directory.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] for empty input
    /// - [`Error::NotADirectory`] if the target is missing and may not be created
    /// - [`Error::DirectoryCreation`] if creating it failed
    /// - [`Error::StaleEntry`] if the entry no longer matches
    pub fn replace_manual(
        &mut self,
        entry: &PathEntry,
        typed: &str,
        create_missing: bool,
    ) -> Result<PathBuf> {
        let typed = typed.trim();
        if typed.is_empty() {
            return Err(Error::Validation {
                field: "replacement".to_string(),
                message: "replacement cannot be empty".to_string(),
            });
        }
        let pos = self.position_of(entry)?;
        let target = PathBuf::from(canonical_or_lexical(&expand(typed)));

        let created = if target.is_dir() {
            false
        } else if create_missing {
            self.create(entry.index(), &target)?;
            true
        } else {
            return Err(Error::NotADirectory { path: target });
        };

        let resolved = PathBuf::from(canonical_or_lexical(&target.to_string_lossy()));
        self.record(FixAction::ReplaceManual {
            index: entry.index(),
            from: entry.normalized().to_string(),
            to: resolved.display().to_string(),
            created,
        });
        self.parts[pos] = typed.to_string();
        Ok(resolved)
    }

    /// Replace the entry with a suggested directory.
    ///
    /// The candidate is checked again right before it is used.
    ///
    /// # Errors
    ///
    /// [`Error::NotADirectory`] if the candidate has disappeared and
    /// [`Error::StaleEntry`] if the entry no longer matches.
    pub fn replace_suggested(&mut self, entry: &PathEntry, candidate: &Path) -> Result<()> {
        let pos = self.position_of(entry)?;
        if !candidate.is_dir() {
            self.record(FixAction::SuggestedInvalid {
                index: entry.index(),
                chosen: candidate.display().to_string(),
            });
            return Err(Error::NotADirectory {
                path: candidate.to_path_buf(),
            });
        }
        let chosen = candidate.to_string_lossy().into_owned();
        self.record(FixAction::ReplaceSuggested {
            index: entry.index(),
            from: entry.normalized().to_string(),
            to: chosen.clone(),
        });
        self.parts[pos] = chosen;
        Ok(())
    }

    /// Create the missing directory and keep the segment text unchanged.
    ///
    /// Returns the directory created.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] for an empty segment,
    /// [`Error::DirectoryCreation`] if creation failed and
    /// [`Error::StaleEntry`] if the entry no longer matches.
    pub fn create_directory(&mut self, entry: &PathEntry) -> Result<PathBuf> {
        self.position_of(entry)?;
        if entry.is_empty_segment() {
            return Err(Error::InvalidPath {
                path: PathBuf::new(),
                reason: "an empty segment names no directory".to_string(),
            });
        }
        let target = PathBuf::from(entry.normalized());
        self.create(entry.index(), &target)?;
        self.record(FixAction::Mkdir {
            index: entry.index(),
            created: target.display().to_string(),
        });
        Ok(target)
    }

    fn create(&mut self, index: usize, target: &Path) -> Result<()> {
        fs::create_dir_all(target).map_err(|source| {
            self.record(FixAction::MkdirFailed {
                index,
                target: target.display().to_string(),
                error: source.to_string(),
            });
            Error::DirectoryCreation {
                path: target.to_path_buf(),
                source,
            }
        })
    }

    /// Replacement candidates for the entry.
    #[must_use]
    pub fn suggestions(&self, entry: &PathEntry) -> Vec<PathBuf> {
        self.suggester.suggest(entry.raw(), self.suggestion_limit)
    }

    /// Record that the user wanted a suggestion but none exist.
    pub fn no_suggestions(&mut self, entry: &PathEntry) {
        self.record(FixAction::SuggestionNone {
            index: entry.index(),
            normalized: entry.normalized().to_string(),
        });
    }

    /// Analyze the proposed value without committing to anything.
    pub fn preview(&mut self) -> Preview {
        let snapshot = self.snapshot();
        let broken = snapshot.broken_count();
        self.record(FixAction::Preview { broken });
        Preview {
            proposed: self.proposed(),
            broken,
            snapshot,
        }
    }

    /// End the session.
    #[must_use]
    pub fn finish(mut self) -> SessionOutcome {
        let proposed = self.proposed();
        self.record(FixAction::SessionFinished {
            proposed: proposed.clone(),
        });
        SessionOutcome {
            snapshot: self.snapshot(),
            proposed,
        }
    }
}
