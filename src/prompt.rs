// Line-oriented console prompting over arbitrary reader/writer pairs
// Sessions are written against this so tests can script the input

use std::io::{BufRead, Write};

use log::debug;

use crate::errors::PromptError;

/// A question/answer channel to the user
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` without a newline and read one trimmed line back
    ///
    /// # Arguments
    /// * `prompt` - Text shown before the cursor
    /// * `what` - Name of the awaited value, used when input ends early
    pub fn ask(&mut self, prompt: &str, what: &'static str) -> Result<String, PromptError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::UnexpectedEof(what));
        }

        let answer = line.trim().to_string();
        debug!("Read {}: {:?}", what, answer);
        Ok(answer)
    }

    /// Print one full line
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Give back the underlying writer, mostly for inspecting scripted sessions
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_and_echoes_prompt() {
        let mut prompter = Prompter::new(Cursor::new("  2x3 \n"), Vec::new());
        let answer = prompter.ask("Size: ", "size").unwrap();

        assert_eq!(answer, "2x3");
        assert_eq!(String::from_utf8(prompter.into_writer()).unwrap(), "Size: ");
    }

    #[test]
    fn test_ask_reports_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let err = prompter.ask("Size: ", "matrix size").unwrap_err();

        assert!(matches!(err, PromptError::UnexpectedEof("matrix size")));
    }
}
