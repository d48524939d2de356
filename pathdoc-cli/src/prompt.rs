//! Line-editor front end for the fix session.

use pathdoc::session::Prompter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;

/// [`Prompter`] backed by rustyline, with history and line editing.
///
/// Ctrl-C and Ctrl-D both end input, which the session treats as quit.
pub struct RustylinePrompter {
    editor: DefaultEditor,
}

impl RustylinePrompter {
    /// Create a prompter on the controlling terminal.
    pub fn new() -> io::Result<Self> {
        let editor = DefaultEditor::new().map_err(into_io)?;
        Ok(Self { editor })
    }
}

impl Prompter for RustylinePrompter {
    fn say(&mut self, line: &str) -> io::Result<()> {
        println!("{line}");
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    // History is a convenience; failing to record it is harmless
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(into_io(e)),
        }
    }
}

fn into_io(e: ReadlineError) -> io::Error {
    match e {
        ReadlineError::Io(e) => e,
        other => io::Error::other(other),
    }
}
