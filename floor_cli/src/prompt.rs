//! Line-prompt engine.
//!
//! Generic over any `BufRead`/`Write` pair so a session can run against a
//! terminal or against in-memory buffers in tests. Every `ask*` method
//! returns `Ok(None)` once input is exhausted.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use floor_core::errors::{EstimateError, EstimateResult};
use floor_core::input::parse_yes_no;
use tracing::debug;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print a line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Show `prompt` and read one line (without the line ending).
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Ask until `parse` accepts the answer.
    pub fn ask_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> EstimateResult<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    debug!(error = %e, code = e.error_code(), "rejected input");
                    self.say(retry_message(&e))?;
                }
            }
        }
    }

    /// Ask until the answer is yes or no.
    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_yes_no(&answer) {
                Some(choice) => return Ok(Some(choice)),
                None => self.say("Please enter 'yes' or 'no'.")?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

fn retry_message(error: &EstimateError) -> String {
    if !error.is_recoverable() {
        return error.to_string();
    }
    match error {
        EstimateError::InvalidInput { reason, .. } => format!("Invalid input. {reason}."),
        EstimateError::MissingField { .. } => "A value is required.".to_string(),
        other => other.to_string(),
    }
}
