use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Prompter owns the input and output handles for one interactive session.
/// Output is flushed when it goes out of scope, on error paths too.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Prints `question` and blocks for one line of input.
    /// The line terminator is stripped, nothing else is.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .with_context(|| format!("Failed to read answer to {:?}", question.trim_end()))?;

        if read == 0 {
            bail!("Input ended before {:?} was answered", question.trim_end());
        }

        if answer.ends_with('\n') {
            answer.pop();
            if answer.ends_with('\r') {
                answer.pop();
            }
        }

        Ok(answer)
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

impl<R: BufRead, W: Write> Drop for Prompter<R, W> {
    fn drop(&mut self) {
        let _ = self.output.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asks_in_order_and_echoes_question() {
        let mut output = Vec::new();
        {
            let mut prompter = Prompter::new("first\nsecond\n".as_bytes(), &mut output);
            assert_eq!(prompter.ask("One? ").unwrap(), "first");
            assert_eq!(prompter.ask("Two? ").unwrap(), "second");
        }
        assert_eq!(String::from_utf8(output).unwrap(), "One? Two? ");
    }

    #[test]
    fn strips_only_the_line_terminator() {
        let mut prompter = Prompter::new("  padded  \r\n\tlast".as_bytes(), Vec::new());
        assert_eq!(prompter.ask("? ").unwrap(), "  padded  ");
        // Final line without a terminator is still an answer.
        assert_eq!(prompter.ask("? ").unwrap(), "\tlast");
    }

    #[test]
    fn empty_line_is_an_answer() {
        let mut prompter = Prompter::new("\n".as_bytes(), Vec::new());
        assert_eq!(prompter.ask("? ").unwrap(), "");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut prompter = Prompter::new("".as_bytes(), Vec::new());
        let err = prompter.ask("Enter snippet name: ").unwrap_err();
        assert!(err.to_string().contains("Enter snippet name:"));
    }
}
