#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::coord::Coord;
use crate::player::Player;

/// Problems with a line typed by the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The line did not hold exactly two tokens.
    WrongTokenCount,
    /// A token was not a non-negative integer.
    NonNumeric,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount => write!(f, "Enter 2 coordinates!"),
            InputError::NonNumeric => write!(f, "Enter numbers!"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a one-based `row column` pair into a zero-based coordinate.
///
/// Range is not checked; a value past the board comes back as a coordinate
/// the board will refuse.
pub fn parse_target(line: &str) -> Result<Coord, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount);
    };
    Ok(Coord::from_one_based(parse_number(x)?, parse_number(y)?))
}

fn parse_number(token: &str) -> Result<i32, InputError> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NonNumeric);
    }
    // Digits only, so the sole failure is overflow: clamp and let the board
    // reject it as out of range.
    Ok(token.parse().unwrap_or(i32::MAX))
}

/// Prompt on `output` and block until a line (or end of input) arrives on
/// `input`. Pass the same reader the [`CliPlayer`] will own; stdin can only
/// be locked once per thread.
pub fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    write!(output, "Press Enter to continue.")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    writeln!(output)
}

/// Human player reading targets line by line.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Release the prompt stream, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coord> {
        loop {
            write!(self.output, "Your move - ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before a target was entered");
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}
