//! Error types for the bracket notation codec.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading or writing bracket notation.

use crate::parser::byte_parser::{ByteParser, DEFAULT_CONTEXT_LENGTH};
use std::error::Error;
use std::fmt;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur in the bracket notation codec.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum ParsingErrorType {
    /// Structural grammar violation, e.g. unbalanced parentheses or a misplaced comma.
    #[error("Malformed bracket notation - {0}")]
    MalformedNotation(String),
    /// A token is present but the value parser (or formatter) rejects it.
    #[error("Invalid value - {0}")]
    InvalidValue(String),
    #[error("IO error - {0}")]
    Io(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and upcoming bytes).
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser(kind: ParsingErrorType, parser: &ByteParser) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for MalformedNotation
    pub fn malformed_notation(parser: &ByteParser, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::MalformedNotation(msg), parser)
    }

    /// Convenience constructor for InvalidValue, reported at the start of the token.
    pub fn invalid_value(parser: &ByteParser, token_start: usize, msg: String) -> Self {
        let mut error = Self::from_parser(ParsingErrorType::InvalidValue(msg), parser);
        error.position = token_start;
        error
    }

    /// Create a ParsingError without parser context (for writer errors).
    ///
    /// For writer errors, `position` is the pre-order index of the offending node.
    pub fn without_context(kind: ParsingErrorType, position: usize) -> Self {
        Self { kind, position, context: String::new() }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input following the error position (may be empty)
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns whether this is a structural grammar violation.
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ParsingErrorType::MalformedNotation(_))
    }

    /// Returns whether a value was rejected by the value parser or formatter.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self.kind, ParsingErrorType::InvalidValue(_))
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !matches!(self.kind, ParsingErrorType::Io(_)) {
            write!(f, " at position {}", self.position)?;
        }

        if !self.context.is_empty() {
            write!(f, "\n  Context (next {} bytes): {}", self.context.len(), self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorType::Io(err.to_string()),
            position: 0,
            context: String::new(),
        }
    }
}
