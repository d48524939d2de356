//! Session states, commands, and the transition function.

use std::fmt;
use std::str::FromStr;

/// Where the interactive session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the broken list and waiting for a command.
    AwaitingCommand,
    /// Printing the proposed value and its broken count.
    Preview,
    /// Running the per-entry flow for the given 1-based index.
    EntrySelected(usize),
    /// Walking every broken entry in order.
    GuidedAll,
    /// Done. Terminal.
    Quit,
}

impl SessionState {
    /// True once the session has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Quit
    }

    /// The state after the work of this state is done.
    ///
    /// Every non-terminal state returns to [`SessionState::AwaitingCommand`].
    #[must_use]
    pub fn completed(self) -> Self {
        match self {
            Self::Quit => Self::Quit,
            _ => Self::AwaitingCommand,
        }
    }
}

/// A command typed at the `Fix>` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fix one entry by index.
    Select(usize),
    /// Guided pass over every broken entry.
    GuidedAll,
    /// Show the proposed value.
    Preview,
    /// End the session.
    Quit,
}

/// Input that is not a valid command or action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError(&'static str);

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for InputError {}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "q" => Ok(Self::Quit),
            "p" => Ok(Self::Preview),
            "a" => Ok(Self::GuidedAll),
            _ => s
                .parse::<usize>()
                .map(Self::Select)
                .map_err(|_| InputError("Enter a number, or a/p/q.")),
        }
    }
}

/// Compute the next state from a command.
///
/// Commands are only meaningful while awaiting one; in any other state the
/// state is returned unchanged. Quit is terminal.
///
/// ```
/// use pathdoc::session::{transition, Command, SessionState};
///
/// let next = transition(SessionState::AwaitingCommand, Command::Select(3));
/// assert_eq!(next, SessionState::EntrySelected(3));
/// assert_eq!(transition(SessionState::Quit, Command::Preview), SessionState::Quit);
/// ```
#[must_use]
pub fn transition(state: SessionState, command: Command) -> SessionState {
    if state != SessionState::AwaitingCommand {
        return state;
    }
    match command {
        Command::Select(index) => SessionState::EntrySelected(index),
        Command::GuidedAll => SessionState::GuidedAll,
        Command::Preview => SessionState::Preview,
        Command::Quit => SessionState::Quit,
    }
}

/// A choice in the per-entry flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// `1`: leave the entry as it is.
    Keep,
    /// `2`: drop the entry.
    Remove,
    /// `3`: replace with a typed directory.
    ReplaceManual,
    /// `4`: replace with a suggestion.
    ReplaceFromSuggestion,
    /// `5`: create the missing directory.
    CreateDirectory,
    /// `b`: back to the command prompt.
    Back,
}

impl EntryAction {
    /// The action menu, one line per choice.
    pub const MENU: [&'static str; 6] = [
        "1) Keep (do nothing)",
        "2) Remove from PATH",
        "3) Replace with a directory you type",
        "4) Replace with one of the suggestions",
        "5) Create the directory (mkdir -p) and keep it",
        "b) Back",
    ];
}

impl FromStr for EntryAction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(Self::Keep),
            "2" => Ok(Self::Remove),
            "3" => Ok(Self::ReplaceManual),
            "4" => Ok(Self::ReplaceFromSuggestion),
            "5" => Ok(Self::CreateDirectory),
            "b" => Ok(Self::Back),
            _ => Err(InputError("Invalid action.")),
        }
    }
}
