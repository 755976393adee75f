//! Bracket notation parser and writer for binary trees.
//!
//! This module provides [`BracketParser`] to parse bracket notation into a
//! [`Tree`] and [`to_bracket`]/[`to_bracket_with`] to write it back. Values
//! are converted by an injected parser and formatter, so the codec works for
//! any value type.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_str`] - parses a string with values via [`FromStr`]
//! * [`parse_file`] - reads a whole file and parses it
//! * [`write_file`] - writes a tree as a single line
//!
//! # Full API
//! For more control, configure a [`BracketParser`]:
//! * [`BracketParser::parse_str`] - parse a string
//! * [`BracketParser::parse`] - parse from a [`ByteParser`](crate::parser::ByteParser)
//!
//! # Format
//! The bracket notation has the following grammar:
//! * `tree ::= value [ '(' tree [ ',' tree ] ')' ]`
//!
//! Furthermore:
//! * A value is a maximal run of characters other than `(`, `)`, `,` and whitespace
//! * Whitespace can occur between any two elements
//! * A node with children lists its left child first; a right child can only
//!   be written after a left child
//! * The empty tree is the empty string
//!
//! For example, `1 (2 (4, 5), 3)` is the tree with root `1`, whose left child
//! `2` has the leaves `4` and `5`, and whose right child is the leaf `3`.

mod defs;
mod parser;
mod writer;

pub use self::parser::{BracketParser, FromStrBracketParser};
pub use self::writer::{BracketStyle, to_bracket, to_bracket_with};

use crate::model::Tree;
use crate::parser::ParsingError;
use crate::parser::byte_parser::ByteParser;
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a bracket notation string, converting values via [`FromStr`].
///
/// This is a convenience function using default settings and thus not
/// requiring configuration of a parser.
///
/// # Example
/// ```
/// use bracktree::bracket::parse_str;
///
/// let tree = parse_str::<i32>("1 (2 (4, 5), 3)").unwrap();
/// let level: Vec<i32> = tree.level_order_iter().copied().collect();
/// assert_eq!(level, vec![1, 2, 3, 4, 5]);
///
/// assert!(parse_str::<i32>("1 (2,").unwrap_err().is_malformed());
/// assert!(parse_str::<i32>("1 (x)").unwrap_err().is_invalid_value());
/// ```
pub fn parse_str<T>(text: &str) -> Result<Tree<T>, ParsingError>
where
    T: FromStr,
    T::Err: Display,
{
    FromStrBracketParser::<T>::from_str_values().parse_str(text)
}

/// Reads the whole file and parses its content with the given parser.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
/// * `bracket_parser` - The configured [BracketParser]
///
/// # Returns
/// * [`Tree`] - The parsed tree (empty if the file holds only whitespace)
/// * [`ParsingError`] - If reading fails or the notation is invalid
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file<P, T, E, F>(path: P, bracket_parser: &mut BracketParser<T, E, F>) -> Result<Tree<T>, ParsingError>
where
    P: AsRef<Path>,
    F: FnMut(&str) -> Result<T, E>,
    E: fmt::Display,
{
    let contents = fs::read(path.as_ref())?;
    let mut byte_parser = ByteParser::for_bytes(contents);
    let tree = bracket_parser.parse(&mut byte_parser)?;
    info!(num_nodes = tree.num_nodes(), "loaded tree");
    Ok(tree)
}

/// Writes the tree in bracket notation to a file as a single line,
/// replacing any previous content.
///
/// # Errors
/// `InvalidValue` if a value cannot be written as a token (see [to_bracket_with]),
/// or `Io` if writing fails.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_file<P, T>(path: P, tree: &Tree<T>, style: BracketStyle) -> Result<(), ParsingError>
where
    P: AsRef<Path>,
    T: Display,
{
    let mut notation = to_bracket(tree, style)?;
    notation.push('\n');
    fs::write(path.as_ref(), notation)?;
    info!(num_nodes = tree.num_nodes(), "saved tree");
    Ok(())
}
