//! FILENAME: table/src/value.rs
//! PURPOSE: The concrete cell payload stored in a Table's data matrix.
//! CONTEXT: A `Value` is what a non-empty Entry holds. `Null` is a legal
//! stored value and therefore distinct from an empty Entry: a cell can
//! hold "nothing" on purpose without counting as never-set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The raw data a table cell can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
    Boolean(bool),
    Null,
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Text(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Value::Null => write!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(3.25).to_string(), "3.25");
        assert_eq!(Value::text("hi").to_string(), "hi");
        assert_eq!(Value::Boolean(true).to_string(), "TRUE");
        assert_eq!(Value::Null.to_string(), "NULL");
    }

    #[test]
    fn test_null_is_a_value_not_an_empty_entry() {
        use matrix::Entry;
        let entry = Entry::with_value(Value::Null);
        assert!(entry.is_not_empty());
    }
}
