//! Typed calculator keys.
//!
//! Button labels are converted into a [`Key`] once at the UI boundary so the
//! state machine never compares strings.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label of the backspace button.
pub const BACKSPACE_LABEL: &str = "←";

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol printed on the operator's button.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// A single calculator keypress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit, always in `0..=9`.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Key {
    /// The character this key contributes to the display, if any.
    pub fn entry_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }
}

/// Error returned when a button label is not a calculator key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown calculator key: {0:?}")]
    Unknown(String),
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "C" => return Ok(Self::Clear),
            "=" => return Ok(Self::Equals),
            "." => return Ok(Self::Decimal),
            BACKSPACE_LABEL => return Ok(Self::Backspace),
            _ => {}
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                if let Some(d) = c.to_digit(10) {
                    Ok(Self::Digit(d as u8))
                } else if let Some(op) = Operator::from_symbol(c) {
                    Ok(Self::Operator(op))
                } else {
                    Err(KeyError::Unknown(label.to_string()))
                }
            }
            _ => Err(KeyError::Unknown(label.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::Backspace => f.write_str(BACKSPACE_LABEL),
        }
    }
}
