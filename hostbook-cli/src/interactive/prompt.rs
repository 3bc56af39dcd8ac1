//! Line-based prompt steps.
//!
//! Every step returns [`Prompt::Value`] or [`Prompt::Cancelled`]. A step is
//! cancelled by end of input (Ctrl-D) or by entering [`CANCEL_TOKEN`].

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use hostbook_core::error::StoreResult;

/// Input that cancels the current step
pub const CANCEL_TOKEN: &str = ":q";

/// Result of a single prompt step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    /// The user supplied a value
    Value(T),
    /// The user cancelled
    Cancelled,
}

/// Reads answers from `input` and writes questions to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of output
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Reads one trimmed line; `None` on end of input or cancel token
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let answer = line.trim();
        if answer == CANCEL_TOKEN {
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }

    /// Asks for free text; an empty answer selects `default` when given.
    pub fn text(&mut self, label: &str, default: Option<&str>) -> io::Result<Prompt<String>> {
        match default {
            Some(default) => write!(self.output, "{label} [{default}]: ")?,
            None => write!(self.output, "{label}: ")?,
        }
        Ok(match self.read_answer()? {
            None => Prompt::Cancelled,
            Some(answer) if answer.is_empty() => {
                Prompt::Value(default.map(str::to_string).unwrap_or_default())
            }
            Some(answer) => Prompt::Value(answer),
        })
    }

    /// Asks until `parse` accepts the answer, printing each rejection.
    pub fn validated<T>(
        &mut self,
        label: &str,
        default: Option<&str>,
        parse: impl Fn(&str) -> StoreResult<T>,
    ) -> io::Result<Prompt<T>> {
        loop {
            let answer = match self.text(label, default)? {
                Prompt::Value(answer) => answer,
                Prompt::Cancelled => return Ok(Prompt::Cancelled),
            };
            match parse(&answer) {
                Ok(value) => return Ok(Prompt::Value(value)),
                Err(e) => self.say(format!("  {e}"))?,
            }
        }
    }

    /// Asks a yes/no question; an empty answer selects `default`.
    pub fn confirm(&mut self, label: &str, default: bool) -> io::Result<Prompt<bool>> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{label} {hint}: ")?;
            let Some(answer) = self.read_answer()? else {
                return Ok(Prompt::Cancelled);
            };
            match answer.to_lowercase().as_str() {
                "" => return Ok(Prompt::Value(default)),
                "y" | "yes" => return Ok(Prompt::Value(true)),
                "n" | "no" => return Ok(Prompt::Value(false)),
                _ => self.say("  Please answer y or n")?,
            }
        }
    }

    /// Asks the user to pick one option by number or by its exact text.
    pub fn select<S: AsRef<str>>(
        &mut self,
        label: &str,
        options: &[S],
    ) -> io::Result<Prompt<usize>> {
        if options.is_empty() {
            return Ok(Prompt::Cancelled);
        }

        self.say(label)?;
        for (i, option) in options.iter().enumerate() {
            self.say(format!("  {}) {}", i + 1, option.as_ref()))?;
        }

        loop {
            write!(
                self.output,
                "Choose [1-{}] ({CANCEL_TOKEN} to cancel): ",
                options.len()
            )?;
            let Some(answer) = self.read_answer()? else {
                return Ok(Prompt::Cancelled);
            };

            let by_number = answer
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=options.len()).contains(n))
                .map(|n| n - 1);
            let by_text = || options.iter().position(|o| o.as_ref() == answer);

            match by_number.or_else(by_text) {
                Some(index) => return Ok(Prompt::Value(index)),
                None => self.say("  Invalid choice")?,
            }
        }
    }
}
