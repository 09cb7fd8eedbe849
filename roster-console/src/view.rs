//! Console view
//!
//! All terminal interaction goes through `ConsoleView`, which is generic
//! over its input and output so the loop can run against `stdin`/`stdout`
//! or in-memory buffers.

use crate::error::{ConsoleError, ConsoleResult};
use std::io::{BufRead, Write};

/// Line-based prompt and printer
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    /// Creates a view over the given reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints a message on its own line
    pub fn show_message(&mut self, message: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints a heading and the items numbered from 1
    pub fn show_items(&mut self, items: &[String]) -> ConsoleResult<()> {
        writeln!(self.output, "Список элементов:")?;
        for (index, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, item)?;
        }
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one line of input
    ///
    /// The returned text has its line terminator removed but is otherwise
    /// untouched. Bytes that are not valid UTF-8 are replaced with U+FFFD,
    /// so a garbled line is still an ordinary line of input.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InputClosed` at end of input.
    pub fn get_input(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
