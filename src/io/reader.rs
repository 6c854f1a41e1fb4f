//! Token-oriented coefficient reader with a prompt/retry loop.
//!
//! Coefficients are whitespace separated and may span several lines. A bad
//! token throws away whatever is left of its line before the next attempt.
//! Lines are read as raw bytes; a token that is not valid UTF-8 is just
//! another malformed token.

use crate::core::Equation;
use crate::errors::{InputError, MalformedInput};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const PROMPT: &str = "Enter a, b, c coefficients:";
pub const INCORRECT_INPUT: &str = "Incorrect input!";

/// Reads coefficients from a line-oriented source.
pub struct CoefficientReader<R> {
    input: R,
    // unconsumed tokens of the current line
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> CoefficientReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    /// Make a single attempt at reading three coefficients.
    ///
    /// On a malformed token the rest of the current line is discarded and
    /// [`InputError::Malformed`] is returned; the caller decides whether to
    /// try again. End of stream yields [`InputError::Exhausted`].
    pub fn read_equation(&mut self) -> Result<Equation, InputError> {
        let a = self.next_coefficient()?;
        let b = self.next_coefficient()?;
        let c = self.next_coefficient()?;
        Ok(Equation::new(a, b, c).expect("parse_coefficient only yields finite values"))
    }

    fn next_coefficient(&mut self) -> Result<f64, InputError> {
        let token = self.next_token()?;
        match parse_coefficient(&token) {
            Ok(value) => Ok(value),
            Err(reason) => {
                self.pending.clear();
                Err(reason.into())
            }
        }
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                return Err(InputError::Exhausted);
            }
            self.pending.extend(
                self.line
                    .split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }
}

/// Parse one token as a finite real number.
pub fn parse_coefficient(token: &str) -> Result<f64, MalformedInput> {
    let value: f64 = token
        .parse()
        .map_err(|_| MalformedInput::NotANumber(token.to_owned()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MalformedInput::NotFinite(token.to_owned()))
    }
}

/// Prompt until three valid coefficients are read or the input runs dry.
///
/// `show_prompt` controls only the prompt line; the "Incorrect input!"
/// notice is always written so a piped session still explains retries.
pub fn prompt_equation<R: BufRead, W: Write>(
    reader: &mut CoefficientReader<R>,
    out: &mut W,
    show_prompt: bool,
) -> Result<Equation, InputError> {
    let mut attempt = 0usize;
    loop {
        attempt += 1;
        if show_prompt {
            writeln!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        debug!(attempt, "reading coefficients");

        match reader.read_equation() {
            Ok(equation) => {
                debug!(
                    attempt,
                    a = equation.a(),
                    b = equation.b(),
                    c = equation.c(),
                    "coefficients accepted"
                );
                return Ok(equation);
            }
            Err(err) if err.is_recoverable() => {
                let reason = std::error::Error::source(&err).map(|source| source.to_string());
                debug!(attempt, error = %err, reason = reason.as_deref(), "rejected input");
                writeln!(out, "{}", INCORRECT_INPUT)?;
            }
            Err(err) => {
                warn!(attempt, error = %err, "giving up on input");
                return Err(err);
            }
        }
    }
}
