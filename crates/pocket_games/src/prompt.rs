//! Line-based prompting.
//!
//! Every game asks its questions through [`Prompter`] so the drivers can run
//! against the terminal ([`TerminalPrompter`]) or a canned script
//! ([`ScriptedPrompter`]).

use derive_more::{Display, Error};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, warn};

/// Asks the player questions.
pub trait Prompter {
    /// Offers `options` and returns the zero-based index of the chosen one.
    ///
    /// `default` is the label taken when the player just presses enter.
    fn select(&mut self, prompt: &str, default: &str, options: &[&str])
    -> Result<usize, PromptError>;

    /// Reads free text; an empty answer yields `default`.
    fn input(&mut self, prompt: &str, default: &str) -> Result<String, PromptError>;

    /// Asks a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

/// Prompt failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Prompt error: {} at {}:{}", message, file, line)]
pub struct PromptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PromptError {
    /// Creates a new prompt error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<io::Error> for PromptError {
    #[track_caller]
    fn from(err: io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Prompter that reads answers line by line.
///
/// Unrecognised answers are reported and the question is asked again.
#[derive(Debug)]
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Creates a prompter over arbitrary reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<String, PromptError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::new("input closed"));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    #[instrument(skip(self, options), fields(option_count = options.len()))]
    fn select(
        &mut self,
        prompt: &str,
        default: &str,
        options: &[&str],
    ) -> Result<usize, PromptError> {
        if options.is_empty() {
            return Err(PromptError::new("no options to choose from"));
        }

        loop {
            writeln!(self.output, "? {prompt}")?;
            for (index, option) in options.iter().enumerate() {
                writeln!(self.output, "  {}) {}", index + 1, option)?;
            }
            write!(self.output, "Choice [{default}]: ")?;
            let answer = self.read_answer()?;

            if answer.is_empty() {
                let index = options.iter().position(|o| *o == default).unwrap_or(0);
                debug!(index, "Default selected");
                return Ok(index);
            }
            // Labels win over menu numbers so numeric labels ("1".."9") pick themselves.
            if let Some(index) = options.iter().position(|o| o.eq_ignore_ascii_case(&answer)) {
                debug!(index, "Selected by label");
                return Ok(index);
            }
            if let Ok(number) = answer.parse::<usize>()
                && (1..=options.len()).contains(&number)
            {
                debug!(index = number - 1, "Selected by number");
                return Ok(number - 1);
            }

            warn!(%answer, "Unrecognised choice");
            writeln!(self.output, "Invalid choice: {answer}")?;
        }
    }

    #[instrument(skip(self))]
    fn input(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        if default.is_empty() {
            write!(self.output, "? {prompt}")?;
        } else {
            write!(self.output, "? {prompt}[{default}] ")?;
        }
        let answer = self.read_answer()?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    #[instrument(skip(self))]
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            write!(self.output, "? {prompt} ({hint}) ")?;
            let answer = self.read_answer()?.to_ascii_lowercase();
            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    warn!(%answer, "Unrecognised confirmation");
                    writeln!(self.output, "Please answer yes or no.")?;
                }
            }
        }
    }
}

/// A canned answer for [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Index returned from [`Prompter::select`].
    Select(usize),
    /// Text returned from [`Prompter::input`].
    Input(String),
    /// Answer returned from [`Prompter::confirm`].
    Confirm(bool),
}

/// Prompter that replays a fixed list of answers.
///
/// Asking a question when the script is exhausted, or when the next answer is
/// of the wrong kind, is a [`PromptError`]. Select indices are returned as
/// given, even when out of range, so callers' bounds checks can be exercised.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Creates a prompter that will give `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts seen so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer, PromptError> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| PromptError::new(format!("no scripted answer for {prompt:?}")))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(
        &mut self,
        prompt: &str,
        _default: &str,
        _options: &[&str],
    ) -> Result<usize, PromptError> {
        match self.next(prompt)? {
            Answer::Select(index) => Ok(index),
            other => Err(PromptError::new(format!("expected select, scripted {other:?}"))),
        }
    }

    fn input(&mut self, prompt: &str, _default: &str) -> Result<String, PromptError> {
        match self.next(prompt)? {
            Answer::Input(text) => Ok(text),
            other => Err(PromptError::new(format!("expected input, scripted {other:?}"))),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool, PromptError> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(PromptError::new(format!("expected confirm, scripted {other:?}"))),
        }
    }
}
