use crate::error::CalcError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// A pending binary operation between two display values.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
}

impl Operator {
    /// Applies the operation to its left and right operands.
    ///
    /// All arithmetic follows IEEE-754: division by zero produces an
    /// infinity (or NaN for `0/0`), and a negative base with a fractional
    /// exponent produces NaN. Nothing here can fail.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => a / b,
            // Truncating-division remainder, result takes the sign of `a`
            Operator::Remainder => a % b,
            Operator::Power => a.powf(b),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Remainder => "mod",
            Operator::Power => "^",
        }
    }
}

/// One discrete calculator keystroke.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    ClearAll,
    ClearEntry,
    ToggleSign,
    Percent,
    SquareRoot,
    Backspace,
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "." => Token::DecimalPoint,
            "+" => Token::Operator(Operator::Add),
            "-" => Token::Operator(Operator::Subtract),
            "*" => Token::Operator(Operator::Multiply),
            "/" => Token::Operator(Operator::Divide),
            "mod" => Token::Operator(Operator::Remainder),
            "^" => Token::Operator(Operator::Power),
            "=" => Token::Equals,
            "c" => Token::ClearAll,
            "ce" => Token::ClearEntry,
            "neg" => Token::ToggleSign,
            "pct" => Token::Percent,
            "sqrt" => Token::SquareRoot,
            "bs" => Token::Backspace,
            _ => match s.as_bytes() {
                [d] if d.is_ascii_digit() => Token::Digit(d - b'0'),
                _ => return Err(CalcError::UnknownKey(s.to_string())),
            },
        };
        Ok(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "{d}"),
            Token::DecimalPoint => f.write_str("."),
            Token::Operator(op) => f.write_str(op.symbol()),
            Token::Equals => f.write_str("="),
            Token::ClearAll => f.write_str("c"),
            Token::ClearEntry => f.write_str("ce"),
            Token::ToggleSign => f.write_str("neg"),
            Token::Percent => f.write_str("pct"),
            Token::SquareRoot => f.write_str("sqrt"),
            Token::Backspace => f.write_str("bs"),
        }
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// One row of the key-tape CSV format.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct KeyRecord {
    pub key: Token,
}
