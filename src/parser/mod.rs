//! Basic low-level byte parser functionality.
//!
//! This module provides the byte-level infrastructure the bracket notation
//! parser is built on, along with the codec's error type.

pub mod byte_parser;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
