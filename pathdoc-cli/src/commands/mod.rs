//! CLI command implementations.
//!
//! - `inspect`: Print the PATH report
//! - `fix`: Interactive repair session
//! - `suggest`: Replacement candidates for one segment
//! - `classify`: Categorize arbitrary directories
//! - `check`: Fail when the PATH has problems
//! - `completions`: Shell completion scripts

pub mod check;
pub mod classify;
pub mod completions;
pub mod fix;
pub mod inspect;
pub mod suggest;

pub use check::CheckCommand;
pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use fix::FixCommand;
pub use inspect::InspectCommand;
pub use suggest::SuggestCommand;
