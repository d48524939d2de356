//! Terminal abstraction for the interactive driver.

use std::io::{self, BufRead, Write};

/// Line-oriented user interaction.
///
/// The driver only ever prints whole lines and asks single-line questions,
/// so any front end (a line editor, plain stdin, a test script) can sit
/// behind this trait.
pub trait Prompter {
    /// Print one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Ask a question and read one line of input, without the line ending.
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// [`Prompter`] over any buffered reader and writer.
///
/// Used for piped stdin and in tests:
///
/// ```
/// use pathdoc::session::{LinePrompter, Prompter};
///
/// let mut prompter = LinePrompter::new("q\n".as_bytes(), Vec::new());
/// assert_eq!(prompter.ask("Fix> ").unwrap().as_deref(), Some("q"));
/// assert_eq!(prompter.ask("Fix> ").unwrap(), None);
/// assert_eq!(prompter.into_output(), b"Fix> Fix> ");
/// ```
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Wrap a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the writer, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
