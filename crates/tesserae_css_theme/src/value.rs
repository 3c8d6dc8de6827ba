use std::fmt;

use serde::Serialize;

use crate::Length;

/// A primitive token value: a color or length string, or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Number(f64),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }

    /// Interprets the value as a CSS length. The number `0` is a valid length.
    pub fn as_length(&self) -> Option<Length> {
        match self {
            Self::Text(text) => text.parse().ok(),
            Self::Number(number) if *number == 0. => Some(Length::px(0.)),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) if number.fract() == 0. && number.abs() < 1e15 => {
                write!(f, "{}", *number as i64)
            }
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for TokenValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Length> for TokenValue {
    fn from(value: Length) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&TokenValue> for TokenValue {
    fn from(value: &TokenValue) -> Self {
        value.clone()
    }
}
