//! Core error types

use thiserror::Error;

/// Failure to parse a CSS value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("CSS parse error at column {column}: {message} (near \"{fragment}\")")]
pub struct ParseError {
    /// Human-readable description, including the parser context stack
    pub message: String,
    /// Column number (1-indexed)
    pub column: usize,
    /// The input remaining where parsing failed
    pub fragment: String,
}

impl ParseError {
    /// Create an error positioned at `fragment`, a suffix of `input`
    pub fn at(input: &str, fragment: &str, message: impl Into<String>) -> Self {
        let offset = input.len().saturating_sub(fragment.len());
        let column = input[..offset].chars().count() + 1;
        Self {
            message: message.into(),
            column,
            fragment: fragment.chars().take(32).collect(),
        }
    }
}
