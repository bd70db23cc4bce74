use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// A parameter value passed to a test method invocation.
///
/// In a serialized record plain JSON scalars map onto the matching variant;
/// characters are written as `{"char": "c"}` and values with no JSON
/// counterpart as `{"display": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Char { char: char },
    Other { display: String },
    Text(String),
}

/// Strings in double quotes, characters in single quotes, everything else
/// as its plain textual form.
impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Argument::Null => f.write_str("null"),
            Argument::Bool(value) => write!(f, "{}", value),
            Argument::Integer(value) => write!(f, "{}", value),
            Argument::Float(value) => write!(f, "{:?}", value),
            Argument::Char { char } => write!(f, "'{}'", char),
            Argument::Other { display } => f.write_str(display),
            Argument::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Argument::Text(text.to_owned())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Argument::Text(text)
    }
}

impl From<char> for Argument {
    fn from(char: char) -> Self {
        Argument::Char { char }
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Integer(value)
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Float(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Argument::Null)
    }
}
