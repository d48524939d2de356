//! The interactive loop.
//!
//! The loop is driven by [`SessionState`] and [`transition`]; the
//! single-entry command and the guided pass share one per-entry flow.

use crate::audit::FixAction;
use crate::error::{Error, Result};
use crate::output::display_path;
use crate::snapshot::PathEntry;

use super::fix::{FixSession, SessionOutcome};
use super::prompt::Prompter;
use super::state::{transition, Command, EntryAction, SessionState};

/// The line listing the commands available at the `Fix>` prompt.
pub const COMMANDS_HELP: &str = "Commands: [number]=fix entry, a=guided fix all, p=preview, q=quit";

/// How a per-entry flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryOutcome {
    /// The segment was removed; later segments moved up by one.
    Removed,
    /// The segment is still at its position (changed or not).
    Stayed,
    /// The user chose `b`.
    Back,
    /// Input ended.
    Eof,
}

impl FixSession<'_> {
    /// Run the interactive session until the user quits or input ends.
    ///
    /// Partial edits are kept on quit. Input errors are reported and the
    /// prompt repeats; only failures of the prompter itself end the session
    /// with an error.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(mut self, prompter: &mut dyn Prompter) -> Result<SessionOutcome> {
        self.record(FixAction::SessionStarted {
            original: self.proposed(),
        });

        if self.broken().is_empty() {
            prompter.say("No broken PATH entries detected.")?;
            return Ok(self.finish());
        }

        prompter.say("")?;
        prompter.say("Interactive PATH fix mode")?;
        prompter.say("-------------------------")?;
        prompter.say("Fix broken entries one by one. Preview anytime. Nothing is persisted automatically.")?;

        let mut state = SessionState::AwaitingCommand;
        while !state.is_terminal() {
            state = match state {
                SessionState::AwaitingCommand => {
                    self.show_broken_list(prompter)?;
                    match prompter.ask("Fix> ")? {
                        None => SessionState::Quit,
                        Some(line) => match line.parse::<Command>() {
                            Ok(command) => transition(state, command),
                            Err(e) => {
                                prompter.say(&e.to_string())?;
                                state
                            }
                        },
                    }
                }
                SessionState::Preview => {
                    self.show_preview(prompter)?;
                    state.completed()
                }
                SessionState::EntrySelected(index) => match self.locate(index) {
                    Ok(entry) => match self.entry_flow(prompter, &entry)? {
                        EntryOutcome::Eof => SessionState::Quit,
                        _ => state.completed(),
                    },
                    Err(e) => {
                        prompter.say(&lookup_message(&e))?;
                        state.completed()
                    }
                },
                SessionState::GuidedAll => {
                    if self.guided_pass(prompter)? {
                        state.completed()
                    } else {
                        SessionState::Quit
                    }
                }
                SessionState::Quit => SessionState::Quit,
            };
        }

        self.record(FixAction::SessionQuit);
        Ok(self.finish())
    }

    fn show_broken_list(&self, prompter: &mut dyn Prompter) -> Result<()> {
        let broken = self.broken();
        prompter.say("")?;
        if broken.is_empty() {
            prompter.say("No broken entries remain.")?;
        } else {
            prompter.say("Broken PATH entries:")?;
            for entry in &broken {
                prompter.say(&format!("  #{:02} {}", entry.index(), display_path(entry)))?;
            }
        }
        prompter.say("")?;
        prompter.say(COMMANDS_HELP)?;
        Ok(())
    }

    fn show_preview(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        let preview = self.preview();
        prompter.say("")?;
        prompter.say("Preview")?;
        prompter.say("-------")?;
        prompter.say("Proposed export line:")?;
        prompter.say(&format!("  {}", self.shell().path_export(&preview.proposed)))?;
        prompter.say("")?;
        prompter.say(&format!("Summary: broken now = {}", preview.broken))?;
        Ok(())
    }

    /// Walk the broken entries front to back.
    ///
    /// A cursor over segment positions makes sure every entry is offered at
    /// most once per pass: entries that stay in place are stepped over,
    /// removed ones pull the next segment into the cursor's slot. Returns
    /// `false` when input ended.
    fn guided_pass(&mut self, prompter: &mut dyn Prompter) -> Result<bool> {
        let mut cursor = 0;
        loop {
            let next = self.broken().into_iter().find(|e| e.index() > cursor);
            let Some(entry) = next else {
                prompter.say("")?;
                if self.broken().is_empty() {
                    prompter.say("No broken entries remain.")?;
                } else {
                    prompter.say("Guided pass finished.")?;
                }
                return Ok(true);
            };

            match self.entry_flow(prompter, &entry)? {
                EntryOutcome::Removed => cursor = entry.index() - 1,
                EntryOutcome::Stayed => cursor = entry.index(),
                EntryOutcome::Back => return Ok(true),
                EntryOutcome::Eof => return Ok(false),
            }
        }
    }

    fn entry_flow(&mut self, prompter: &mut dyn Prompter, entry: &PathEntry) -> Result<EntryOutcome> {
        prompter.say("")?;
        prompter.say(&format!("Fixing entry #{:02}:", entry.index()))?;
        prompter.say(&format!("  Current : {}", entry.raw()))?;
        prompter.say(&format!("  Expanded: {}", entry.expanded()))?;
        prompter.say(&format!("  Normal  : {}", display_path(entry)))?;

        let suggestions = self.suggestions(entry);
        if !suggestions.is_empty() {
            prompter.say("  Suggestions:")?;
            for (i, candidate) in suggestions.iter().enumerate() {
                prompter.say(&format!("    {}) {}", i + 1, candidate.display()))?;
            }
        }

        prompter.say("")?;
        prompter.say("Actions:")?;
        for line in EntryAction::MENU {
            prompter.say(&format!("  {line}"))?;
        }

        let Some(answer) = prompter.ask("Action [1-5/b]: ")? else {
            return Ok(EntryOutcome::Eof);
        };
        let action = match answer.parse::<EntryAction>() {
            Ok(action) => action,
            Err(e) => {
                prompter.say(&e.to_string())?;
                return Ok(EntryOutcome::Stayed);
            }
        };

        match action {
            EntryAction::Back => Ok(EntryOutcome::Back),
            EntryAction::Keep => {
                if let Err(e) = self.keep(entry) {
                    prompter.say(&failure_message(&e))?;
                }
                Ok(EntryOutcome::Stayed)
            }
            EntryAction::Remove => match self.remove(entry) {
                Ok(removed) => {
                    prompter.say(&format!("-> Removed: {removed}"))?;
                    Ok(EntryOutcome::Removed)
                }
                Err(e) => {
                    prompter.say(&failure_message(&e))?;
                    Ok(EntryOutcome::Stayed)
                }
            },
            EntryAction::ReplaceManual => self.replace_manual_flow(prompter, entry),
            EntryAction::ReplaceFromSuggestion => {
                self.replace_suggested_flow(prompter, entry, &suggestions)
            }
            EntryAction::CreateDirectory => {
                match self.create_directory(entry) {
                    Ok(created) => prompter.say(&format!(
                        "-> Created directory and kept entry: {}",
                        created.display()
                    ))?,
                    Err(e) => prompter.say(&failure_message(&e))?,
                }
                Ok(EntryOutcome::Stayed)
            }
        }
    }

    fn replace_manual_flow(
        &mut self,
        prompter: &mut dyn Prompter,
        entry: &PathEntry,
    ) -> Result<EntryOutcome> {
        loop {
            let Some(typed) = prompter.ask("Replacement directory (or 'b' to back): ")? else {
                return Ok(EntryOutcome::Eof);
            };
            let typed = typed.trim();
            if typed.eq_ignore_ascii_case("b") {
                return Ok(EntryOutcome::Stayed);
            }
            if typed.is_empty() {
                prompter.say("Replacement cannot be empty.")?;
                continue;
            }

            match self.replace_manual(entry, typed, false) {
                Ok(resolved) => {
                    prompter.say(&format!("-> Replaced with: {}", resolved.display()))?;
                    return Ok(EntryOutcome::Stayed);
                }
                Err(Error::NotADirectory { path }) => {
                    prompter.say(&format!("Does not exist: {}", path.display()))?;
                    let Some(answer) = prompter.ask("Create it? [y/N]: ")? else {
                        return Ok(EntryOutcome::Eof);
                    };
                    if !answer.trim().eq_ignore_ascii_case("y") {
                        continue;
                    }
                    match self.replace_manual(entry, typed, true) {
                        Ok(resolved) => {
                            prompter.say(&format!(
                                "-> Created and replaced with: {}",
                                resolved.display()
                            ))?;
                            return Ok(EntryOutcome::Stayed);
                        }
                        Err(e) => prompter.say(&failure_message(&e))?,
                    }
                }
                Err(e) => {
                    prompter.say(&failure_message(&e))?;
                    return Ok(EntryOutcome::Stayed);
                }
            }
        }
    }

    fn replace_suggested_flow(
        &mut self,
        prompter: &mut dyn Prompter,
        entry: &PathEntry,
        suggestions: &[std::path::PathBuf],
    ) -> Result<EntryOutcome> {
        if suggestions.is_empty() {
            prompter.say("No suggestions available.")?;
            self.no_suggestions(entry);
            return Ok(EntryOutcome::Stayed);
        }

        let question = format!("Pick [1-{}] (or 'b' to back): ", suggestions.len());
        let Some(pick) = prompter.ask(&question)? else {
            return Ok(EntryOutcome::Eof);
        };
        let pick = pick.trim();
        if pick.eq_ignore_ascii_case("b") {
            return Ok(EntryOutcome::Stayed);
        }

        let chosen = pick
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| suggestions.get(i));
        match chosen {
            None => prompter.say("Invalid selection.")?,
            Some(candidate) => match self.replace_suggested(entry, candidate) {
                Ok(()) => prompter.say(&format!(
                    "-> Replaced with suggestion: {}",
                    candidate.display()
                ))?,
                Err(Error::NotADirectory { .. }) => {
                    prompter.say("Suggestion is not a valid directory.")?;
                }
                Err(e) => prompter.say(&failure_message(&e))?,
            },
        }
        Ok(EntryOutcome::Stayed)
    }
}

fn lookup_message(error: &Error) -> String {
    match error {
        Error::EntryNotFound { index } => format!("Entry #{index:02} not found."),
        Error::EntryNotBroken { index } => format!("Entry #{index:02} is not broken."),
        other => failure_message(other),
    }
}

fn failure_message(error: &Error) -> String {
    match error {
        Error::DirectoryCreation { source, .. } => format!("Failed to create directory: {source}"),
        other => format!("Cannot apply: {other}"),
    }
}
