//! Line-based prompting over injected input and output handles.
//!
//! The interactive menu reads every field as a full line of text; integers
//! are parsed from their line and a non-numeric line becomes a recoverable
//! [`Error::InvalidInput`]. Reading a whole line per field means an invalid
//! line is always consumed, so the session never re-reads stale input.

use std::io::{BufRead, Write};

use biblio::error::{Error, Result};

/// Couples the session's input and output for prompting.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Create a prompt over the given input and output handles.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line of output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Read the next line, without a prompt.
    ///
    /// Returns `None` at end of input. The line terminator is stripped.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prompt for and read one line of free-form text.
    ///
    /// End of input mid-action is an [`Error::UnexpectedEof`].
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.next_line()?.ok_or(Error::UnexpectedEof)
    }

    /// Prompt for and read one integer.
    ///
    /// The whole line is consumed; surrounding whitespace is ignored. A
    /// non-numeric line fails with [`Error::InvalidInput`].
    pub fn read_int(&mut self, prompt: &str) -> Result<i32> {
        let line = self.read_line(prompt)?;
        let text = line.trim();
        text.parse().map_err(|_| Error::InvalidInput {
            message: format!("expected a number, got '{text}'"),
        })
    }

}
