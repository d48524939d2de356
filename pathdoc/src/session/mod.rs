//! Interactive repair of broken entries.
//!
//! A session edits a list of raw segments and never touches the real
//! environment. When it ends it hands back the proposed value, which the
//! caller prints as an export line for the user to apply.
//!
//! - [`FixSession`] holds the segments and the operations on them
//!   (keep, remove, replace, create, preview), usable without a terminal.
//! - [`FixSession::run`] drives those operations from a [`Prompter`],
//!   following the [`SessionState`] machine.
//!
//! # Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use pathdoc::audit::MemorySink;
//! use pathdoc::session::{FixSession, LinePrompter};
//!
//! let mut log = MemorySink::new();
//! let session = FixSession::new("/nonexistent/a:/nonexistent/b", &mut log);
//!
//! // Remove entry #1, then quit
//! let mut prompter = LinePrompter::new("1\n2\nq\n".as_bytes(), Vec::new());
//! let outcome = session.run(&mut prompter).unwrap();
//!
//! assert_eq!(outcome.proposed, "/nonexistent/b");
//! assert_eq!(outcome.snapshot.broken_count(), 1);
//! # }
//! ```

mod driver;
mod fix;
mod prompt;
mod state;

pub use driver::COMMANDS_HELP;
pub use fix::{FixSession, Preview, SessionOutcome};
pub use prompt::{LinePrompter, Prompter};
pub use state::{transition, Command, EntryAction, InputError, SessionState};
