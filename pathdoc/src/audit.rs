//! The fix action log.
//!
//! Every step a fix session takes is recorded as a [`FixAction`] and handed
//! to an [`ActionSink`]. [`ActionLog`] writes them to a timestamped file,
//! one line each:
//!
//! ```text
//! 2026-03-14 09:26:53 | INFO | #03 REMOVE | /opt/old/bin
//! ```
//!
//! [`MemorySink`] keeps them in memory, which is what the tests use.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::logging::Logger;
use crate::snapshot::Summary;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionLevel {
    /// Normal progress.
    Info,
    /// Something the user asked for could not be done.
    Error,
}

impl fmt::Display for ActionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
        })
    }
}

/// One recorded step of an inspection run or fix session.
///
/// Entry indices are 1-based and refer to the snapshot the action was
/// applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixAction {
    /// Header written once per run.
    RunStarted {
        /// Problem summary of the initial snapshot.
        summary: Summary,
    },
    /// A fix session began.
    SessionStarted {
        /// The PATH value the session starts from.
        original: String,
    },
    /// The entry was left alone.
    Keep {
        /// Entry index.
        index: usize,
        /// Normalized path of the entry.
        normalized: String,
    },
    /// The entry was removed.
    Remove {
        /// Entry index.
        index: usize,
        /// Normalized path of the entry.
        normalized: String,
    },
    /// The entry was replaced by a typed directory.
    ReplaceManual {
        /// Entry index.
        index: usize,
        /// Normalized path before.
        from: String,
        /// Normalized path after.
        to: String,
        /// Whether the directory had to be created first.
        created: bool,
    },
    /// The entry was replaced by a suggestion.
    ReplaceSuggested {
        /// Entry index.
        index: usize,
        /// Normalized path before.
        from: String,
        /// The chosen suggestion.
        to: String,
    },
    /// The chosen suggestion no longer exists.
    SuggestedInvalid {
        /// Entry index.
        index: usize,
        /// The rejected suggestion.
        chosen: String,
    },
    /// The user asked to pick a suggestion but there were none.
    SuggestionNone {
        /// Entry index.
        index: usize,
        /// Normalized path of the entry.
        normalized: String,
    },
    /// The missing directory was created and the entry kept.
    Mkdir {
        /// Entry index.
        index: usize,
        /// The directory created.
        created: String,
    },
    /// Directory creation failed.
    MkdirFailed {
        /// Entry index.
        index: usize,
        /// The directory that could not be created.
        target: String,
        /// The underlying error.
        error: String,
    },
    /// An action referred to an entry that moved or changed.
    StaleEntry {
        /// Entry index.
        index: usize,
    },
    /// The user asked for a preview.
    Preview {
        /// Broken entries in the proposed value.
        broken: usize,
    },
    /// The user quit the session.
    SessionQuit,
    /// The session ended.
    SessionFinished {
        /// The proposed PATH value.
        proposed: String,
    },
}

impl FixAction {
    /// Severity of this action's log line.
    #[must_use]
    pub fn level(&self) -> ActionLevel {
        match self {
            Self::MkdirFailed { .. } | Self::StaleEntry { .. } => ActionLevel::Error,
            _ => ActionLevel::Info,
        }
    }

    /// Short action tag, as written in the log.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::RunStarted { .. } => "RUN",
            Self::SessionStarted { .. } => "SESSION",
            Self::Keep { .. } => "KEEP",
            Self::Remove { .. } => "REMOVE",
            Self::ReplaceManual { created: false, .. } => "REPLACE(manual)",
            Self::ReplaceManual { created: true, .. } => "REPLACE+MKDIR(manual)",
            Self::ReplaceSuggested { .. } => "REPLACE(suggested)",
            Self::SuggestedInvalid { .. } => "SUGGESTED_INVALID",
            Self::SuggestionNone { .. } => "SUGGESTION_NONE",
            Self::Mkdir { .. } => "MKDIR",
            Self::MkdirFailed { .. } => "MKDIR FAILED",
            Self::StaleEntry { .. } => "STALE",
            Self::Preview { .. } => "PREVIEW",
            Self::SessionQuit => "QUIT",
            Self::SessionFinished { .. } => "FINISHED",
        }
    }

    /// Entry index the action applies to, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Keep { index, .. }
            | Self::Remove { index, .. }
            | Self::ReplaceManual { index, .. }
            | Self::ReplaceSuggested { index, .. }
            | Self::SuggestedInvalid { index, .. }
            | Self::SuggestionNone { index, .. }
            | Self::Mkdir { index, .. }
            | Self::MkdirFailed { index, .. }
            | Self::StaleEntry { index } => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for FixAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.index() {
            write!(f, "#{index:02} ")?;
        }
        f.write_str(self.tag())?;
        match self {
            Self::RunStarted { summary } => write!(
                f,
                " | entries={} broken={} duplicates={} shadowed={}",
                summary.total_entries,
                summary.broken.len(),
                summary.duplicates.len(),
                summary.shadowed.len()
            ),
            Self::SessionStarted { original } => write!(f, " | original={original}"),
            Self::Keep { normalized, .. }
            | Self::Remove { normalized, .. }
            | Self::SuggestionNone { normalized, .. } => write!(f, " | {normalized}"),
            Self::ReplaceManual { from, to, .. } | Self::ReplaceSuggested { from, to, .. } => {
                write!(f, " | from={from} | to={to}")
            }
            Self::SuggestedInvalid { chosen, .. } => write!(f, " | chosen={chosen}"),
            Self::Mkdir { created, .. } => write!(f, " | created={created}"),
            Self::MkdirFailed { target, error, .. } => {
                write!(f, " | target={target} | error={error}")
            }
            Self::Preview { broken } => write!(f, " | broken={broken}"),
            Self::SessionFinished { proposed } => write!(f, " | proposed={proposed}"),
            Self::StaleEntry { .. } | Self::SessionQuit => Ok(()),
        }
    }
}

/// Destination for fix actions.
pub trait ActionSink {
    /// Record one action.
    fn record(&mut self, action: &FixAction);
}

/// Keeps actions in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    actions: Vec<FixAction>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions recorded so far, oldest first.
    #[must_use]
    pub fn actions(&self) -> &[FixAction] {
        &self.actions
    }

    /// Tags of the recorded actions.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        self.actions.iter().map(FixAction::tag).collect()
    }
}

impl ActionSink for MemorySink {
    fn record(&mut self, action: &FixAction) {
        self.actions.push(action.clone());
    }
}

/// Discards every action.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ActionSink for NullSink {
    fn record(&mut self, _action: &FixAction) {}
}

/// Appends actions to `path_fix_log_<YYYYmmdd_HHMMSS>.log`.
///
/// Each line is also passed to the stderr [`Logger`] at info level. Write
/// failures after the file has been opened are reported once through the
/// logger and otherwise ignored; a broken log must not abort a repair.
#[derive(Debug)]
pub struct ActionLog {
    path: PathBuf,
    writer: BufWriter<File>,
    logger: Logger,
    write_failed: bool,
}

impl ActionLog {
    /// Create a new log file in `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be created.
    pub fn create(dir: &Path, logger: Logger) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let name = format!("path_fix_log_{}.log", Local::now().format("%Y%m%d_%H%M%S"));
        let path = dir.join(name);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        log::debug!("action log at {}", path.display());
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            logger,
            write_failed: false,
        })
    }

    /// Location of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format one log line, without the trailing newline.
    #[must_use]
    pub fn format_line(action: &FixAction) -> String {
        format!(
            "{} | {} | {action}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            action.level()
        )
    }
}

impl ActionSink for ActionLog {
    fn record(&mut self, action: &FixAction) {
        let line = Self::format_line(action);
        self.logger.info(&line);
        let written = writeln!(self.writer, "{line}").and_then(|()| self.writer.flush());
        if let Err(e) = written {
            if !self.write_failed {
                self.logger
                    .warn(&format!("cannot write {}: {e}", self.path.display()));
                self.write_failed = true;
            }
        }
    }
}

/// Default log directory: `~/.pathdoc/logs`.
#[must_use]
pub fn default_log_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".pathdoc").join("logs"))
}
