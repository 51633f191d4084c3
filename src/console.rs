use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";

/// Outcome of a single prompt.
#[derive(Clone, Debug, PartialEq)]
pub enum Answer<T> {
    Value(T),
    /// The line did not parse; holds the trimmed text
    Malformed(String),
    /// Input is exhausted
    Closed,
}

/// Line-oriented prompt/answer dialogue over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print `prompt` without a newline and parse the next input line.
    pub fn ask<T: FromStr>(&mut self, prompt: &str) -> io::Result<Answer<T>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Answer::Closed);
        }
        let text = line.trim();
        Ok(match text.parse() {
            Ok(value) => Answer::Value(value),
            Err(_) => Answer::Malformed(text.into()),
        })
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
