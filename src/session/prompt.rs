//! Line-oriented terminal prompting.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::Result;

/// Asks questions on `output` and reads trimmed answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and read one answer line.
    ///
    /// End of input reads as an empty answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to or read from.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Print one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written to.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn asks_and_trims_answers() -> Result<()> {
        let mut prompter = Prompter::new(Cursor::new("  answer \nsecond\n"), Vec::new());
        assert_eq!(prompter.ask("Q1: ")?, "answer");
        assert_eq!(prompter.ask("Q2: ")?, "second");
        assert_eq!(prompter.ask("Q3: ")?, "");
        prompter.say("done")?;

        let output = String::from_utf8_lossy(&prompter.into_output()).into_owned();
        assert_eq!(output, "Q1: Q2: Q3: done\n");
        Ok(())
    }
}
