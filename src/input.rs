//! Input Module
//!
//! Validates what the user types at the prompt before anything is factored.

use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::One;

use crate::error::{PrimeError, Result};

/// A validated prompt entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `q` or `quit`, any case
    Quit,
    /// A natural number greater than 1
    Factor(BigUint),
}

// == Parse Command ==
/// Turns one line of user input into a command.
///
/// Accepts an optional sign and `_` separators between digits. Leading zeros
/// are dropped, so "007" factors 7.
pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim();

    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    if trimmed.is_empty() {
        return Err(PrimeError::EmptyInput);
    }

    let (negative, body) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if !is_digit_literal(body) {
        return Err(PrimeError::InvalidInput(trimmed.to_string()));
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    let number = BigUint::from_str(&digits)
        .map_err(|_| PrimeError::InvalidInput(trimmed.to_string()))?;

    if negative || number <= BigUint::one() {
        return Err(PrimeError::TooSmall(trimmed.to_string()));
    }

    Ok(Command::Factor(number))
}

/// ASCII digits, with single underscores allowed only between two digits.
fn is_digit_literal(body: &str) -> bool {
    !body.is_empty()
        && !body.starts_with('_')
        && !body.ends_with('_')
        && !body.contains("__")
        && body.bytes().all(|b| b.is_ascii_digit() || b == b'_')
}
