//! Evaluation reports
//!
//! Every CLI command produces one [`Evaluation`], printed as a single text
//! line or as JSON.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::config::OutputFormat;

/// A named argument passed to a catalog function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub name: &'static str,
    pub value: Value,
}

/// The call of one catalog function and its result.
///
/// Real numbers go through [`real`] so that infinities and NaN survive as
/// the strings `"inf"`, `"-inf"` and `"NaN"`. JSON has no literal for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub function: &'static str,
    pub arguments: Vec<Argument>,
    pub result: Value,
}

impl Evaluation {
    pub fn new(function: &'static str, result: impl Serialize) -> Self {
        Self {
            function,
            arguments: Vec::new(),
            result: to_value(result),
        }
    }

    /// Append an argument, builder style.
    pub fn arg(mut self, name: &'static str, value: impl Serialize) -> Self {
        self.arguments.push(Argument {
            name,
            value: to_value(value),
        });
        self
    }

    /// Render in the requested format.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.to_string(),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
            }
        }
    }
}

/// JSON value for a real number, spelling out non-finite values.
pub fn real(value: f64) -> Value {
    if value.is_finite() {
        Value::from(value)
    } else {
        Value::String(value.to_string())
    }
}

// Plain data only reaches here (numbers, strings, vectors, dates), none of
// which can fail to serialize.
fn to_value(value: impl Serialize) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", argument.name, argument.value)?;
        }
        write!(f, ") = ")?;
        match &self.result {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}
