//! Blocking, pattern-checked input acquisition.
//!
//! A [`Prompter`] keeps asking until the user types something that fully
//! matches the requested pattern, so malformed text never reaches the store.
//! [`LinePrompter`] reads any `BufRead` (piped stdin, scripted tests);
//! [`TerminalPrompter`] drives an interactive `dialoguer` prompt.

use std::io::BufRead;

use dialoguer::Input;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::ui::Output;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input closed")]
    Closed,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("interactive prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),
}

/// Source of validated user input.
pub trait Prompter {
    /// Ask until a non-empty, trimmed line fully matches `pattern`.
    fn prompt_string(&mut self, message: &str, pattern: &str) -> Result<String, InputError>;

    /// Ask until a line fully matches `pattern` and parses as an integer.
    fn prompt_integer(&mut self, message: &str, pattern: &str) -> Result<i64, InputError>;
}

/// Compile `pattern` so it has to match the whole input.
pub fn anchored(pattern: &str) -> Result<Regex, InputError> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|source| InputError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn accepts(re: &Regex, text: &str) -> bool {
    !text.is_empty() && re.is_match(text)
}

/// Line-oriented prompter over any buffered reader.
pub struct LinePrompter<R> {
    reader: R,
    output: Output,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R, output: Output) -> Self {
        Self { reader, output }
    }

    /// Read the next trimmed line; end of input is `InputError::Closed`.
    fn next_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn prompt_string(&mut self, message: &str, pattern: &str) -> Result<String, InputError> {
        let re = anchored(pattern)?;
        self.output.prompt(message);
        loop {
            let text = self.next_line()?;
            if accepts(&re, &text) {
                return Ok(text);
            }
            debug!(pattern, "rejected string input");
            self.output
                .warn(&format!("Please input a string with format: {}", pattern));
        }
    }

    fn prompt_integer(&mut self, message: &str, pattern: &str) -> Result<i64, InputError> {
        let re = anchored(pattern)?;
        self.output.prompt(message);
        loop {
            let text = self.next_line()?;
            if accepts(&re, &text) {
                if let Ok(value) = text.parse::<i64>() {
                    return Ok(value);
                }
            }
            debug!(pattern, "rejected integer input");
            self.output
                .warn(&format!("Please input an integer with format: {}", pattern));
        }
    }
}

/// Interactive prompter for a terminal on stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ask(
        message: &str,
        re: Regex,
        kind: &'static str,
        pattern: &str,
    ) -> Result<String, InputError> {
        let hint = format!("Please input {} with format: {}", kind, pattern);
        let text: String = Input::new()
            .with_prompt(message.trim_end().trim_end_matches(':'))
            .validate_with(move |input: &String| -> Result<(), String> {
                if accepts(&re, input.trim()) {
                    Ok(())
                } else {
                    Err(hint.clone())
                }
            })
            .interact_text()?;
        Ok(text.trim().to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn prompt_string(&mut self, message: &str, pattern: &str) -> Result<String, InputError> {
        Self::ask(message, anchored(pattern)?, "a string", pattern)
    }

    fn prompt_integer(&mut self, message: &str, pattern: &str) -> Result<i64, InputError> {
        let re = anchored(pattern)?;
        loop {
            let text = Self::ask(message, re.clone(), "an integer", pattern)?;
            // The pattern may admit text that is not a number
            if let Ok(value) = text.parse::<i64>() {
                return Ok(value);
            }
        }
    }
}
