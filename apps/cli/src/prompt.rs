//! # Console Prompts
//!
//! Line-oriented prompting over any `BufRead` / `Write` pair, so the shell
//! runs the same against a terminal and against a scripted test input.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{ShellError, ShellResult};

/// Input and output streams of one shell session.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints `label`, then reads one line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 become `U+FFFD`, so a garbled line is
    /// just unusual input for the current prompt.
    ///
    /// ## Returns
    /// * `Ok(line)` - The typed text (possibly empty)
    /// * `Err(ShellError::InputClosed)` - End of input
    pub fn prompt(&mut self, label: &str) -> ShellResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ShellError::InputClosed);
        }

        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(line)
    }

    /// Prompts for a replacement value, showing the current one.
    ///
    /// Returns `None` when the user just presses Enter.
    pub fn prompt_with_default(&mut self, label: &str, current: &str) -> ShellResult<Option<String>> {
        let answer = self.prompt(&format!("New {} (current: {}): ", label, current))?;
        let answer = answer.trim();

        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: impl Display) -> ShellResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Gives the output stream back (used by tests).
    pub fn into_output(self) -> W {
        self.output
    }
}
