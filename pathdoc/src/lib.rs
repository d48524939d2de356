#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathdoc
//!
//! A library for inspecting and repairing the `PATH` environment variable.
//!
//! A `PATH` string is split into ordered entries. Each entry is expanded,
//! normalized, probed on the filesystem and classified into a category.
//! Broken, duplicate and shadowed entries are flagged, and an interactive
//! session can propose a repaired value without ever touching the real
//! environment.
//!
//! ## Core Types
//!
//! - [`SnapshotBuilder`] and [`Snapshot`]: the analyzed view of a `PATH` value
//! - [`PathEntry`] and [`Flag`]: one analyzed segment and its problems
//! - [`Classifier`] and [`Category`]: rule-based categorization
//! - [`Suggester`]: replacement candidates for broken entries
//! - [`FixSession`]: the repair session
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use pathdoc::SnapshotBuilder;
//!
//! let snapshot = SnapshotBuilder::new().build("/usr/bin:/nonexistent/bin:/usr/bin");
//! assert_eq!(snapshot.len(), 3);
//!
//! let summary = snapshot.summary();
//! assert_eq!(summary.broken, vec![2]);
//! assert_eq!(summary.duplicates, vec![3]);
//! # }
//! ```

pub mod analysis;
pub mod audit;
pub mod classify;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod session;
pub mod snapshot;
pub mod suggest;

// Re-export key types at crate root for convenience
pub use audit::{ActionLog, ActionSink, FixAction, MemorySink, NullSink};
pub use classify::{Category, Classification, Classifier};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{ColorMode, OutputFormat, OutputFormatter, Report, ShellType};
pub use path::PathRelationship;
pub use session::{FixSession, LinePrompter, Prompter, SessionOutcome};
pub use snapshot::{Flag, PathEntry, Snapshot, SnapshotBuilder, Summary};
pub use suggest::Suggester;
