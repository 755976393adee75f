//! Structs and logic to parse bracket notation.

use crate::bracket::defs::{DEFAULT_MAX_DEPTH, STRUCTURAL_DELIMITERS};
use crate::model::{Node, Tree};
use crate::parser::byte_parser::ByteParser;
use crate::parser::parsing_error::ParsingError;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::debug;

// =#========================================================================#=
// BRACKET PARSER
// =#========================================================================#=
/// Parser (configuration) for binary trees in bracket notation.
///
/// Generic over the value type `T`, which is produced from each token by an
/// injected value parser `F: FnMut(&str) -> Result<T, E>`.
///
/// # Construction
/// * [`new(value_parser)`](Self::new): any token-to-value conversion
/// * [`from_str_values()`](Self::from_str_values): uses [FromStr] of `T`
///
/// # Configuration
/// * [`with_max_depth(max_depth)`](Self::with_max_depth)
///     - Maximum nesting depth accepted (root at depth 0); deeper input is
///       rejected as malformed. Parsing keeps open nodes on a heap stack, so
///       the limit bounds memory, not call depth.
///
/// # Format
/// * `tree ::= value [ '(' tree [ ',' tree ] ')' ]`
/// * A value is a maximal run of characters other than `(`, `)`, `,` and whitespace
/// * Whitespace may occur between any two elements
/// * The left child must be present for a right child to be written
/// * Empty (or whitespace-only) input is the empty tree
///
/// # Example
/// ```
/// use bracktree::bracket::BracketParser;
///
/// let mut parser = BracketParser::new(|token: &str| token.parse::<i64>());
/// let tree = parser.parse_str("1 (2 (4, 5), 3)").unwrap();
///
/// let in_order: Vec<i64> = tree.in_order_iter().copied().collect();
/// assert_eq!(in_order, vec![4, 2, 5, 1, 3]);
/// ```
pub struct BracketParser<T, E, F> {
    value_parser: F,
    max_depth: usize,
    _value: PhantomData<fn() -> Result<T, E>>,
}

/// A [BracketParser] that parses values via [FromStr].
pub type FromStrBracketParser<T> =
    BracketParser<T, <T as FromStr>::Err, fn(&str) -> Result<T, <T as FromStr>::Err>>;

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl<T, E, F> BracketParser<T, E, F>
where
    F: FnMut(&str) -> Result<T, E>,
    E: fmt::Display,
{
    /// Creates a new [BracketParser] with the given value parser.
    pub fn new(value_parser: F) -> Self {
        Self {
            value_parser,
            max_depth: DEFAULT_MAX_DEPTH,
            _value: PhantomData,
        }
    }

    /// Sets the maximum nesting depth (root at depth 0).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the configured maximum nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<T> FromStrBracketParser<T>
where
    T: FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    /// Creates a new [BracketParser] that parses values via [FromStr].
    pub fn from_str_values() -> Self {
        Self::new(T::from_str)
    }
}

// ============================================================================
// Parsing (pub)
// ============================================================================
impl<T, E, F> BracketParser<T, E, F>
where
    F: FnMut(&str) -> Result<T, E>,
    E: fmt::Display,
{
    /// Parses a whole string into a [Tree].
    pub fn parse_str(&mut self, text: &str) -> Result<Tree<T>, ParsingError> {
        let mut byte_parser = ByteParser::for_str(text);
        self.parse(&mut byte_parser)
    }

    /// Parses a single tree from the given [ByteParser], which must contain
    /// nothing but the tree and surrounding whitespace.
    ///
    /// # Returns
    /// * `Ok(Tree)` - The parsed tree, empty if there was only whitespace
    /// * `Err(ParsingError)` - `MalformedNotation` for grammar violations and
    ///   `InvalidValue` if the value parser rejected a token
    pub fn parse(&mut self, parser: &mut ByteParser) -> Result<Tree<T>, ParsingError> {
        parser.skip_whitespace();
        if parser.is_eof() {
            debug!("parsed empty tree");
            return Ok(Tree::new());
        }

        let tree = Tree::from_root(self.parse_root(parser)?);

        parser.skip_whitespace();
        if !parser.is_eof() {
            return Err(ParsingError::malformed_notation(
                parser,
                format!("Expected end of input after tree but found {}", describe(parser.peek())),
            ));
        }

        debug!(num_nodes = tree.num_nodes(), "parsed tree");
        Ok(tree)
    }
}

// ============================================================================
// Parsing helpers (private)
// ============================================================================
/// A node whose `(` has been read but whose `)` has not.
struct OpenNode<T> {
    value: T,
    /// Set once the left subtree is complete
    left: Option<Node<T>>,
}

impl<T, E, F> BracketParser<T, E, F>
where
    F: FnMut(&str) -> Result<T, E>,
    E: fmt::Display,
{
    /// Parses `value [ '(' children ')' ]` without recursion.
    ///
    /// `open` holds the ancestors of the node being read, so its length is
    /// that node's depth. A finished node is attached to the top open node:
    /// as its left child if a `,` or `)` follows, or as its right child,
    /// which closes the parent in turn.
    fn parse_root(&mut self, parser: &mut ByteParser) -> Result<Node<T>, ParsingError> {
        let mut open: Vec<OpenNode<T>> = Vec::new();

        loop {
            parser.skip_whitespace();
            let value = self.parse_value(parser)?;

            parser.skip_whitespace();
            if parser.consume_if(b'(') {
                if open.len() >= self.max_depth {
                    return Err(ParsingError::malformed_notation(
                        parser,
                        format!("Nesting deeper than {} levels", self.max_depth),
                    ));
                }
                expect_left_subtree(parser)?;
                open.push(OpenNode { value, left: None });
                continue;
            }

            let mut done = Node::new(value);
            loop {
                let Some(mut parent) = open.pop() else {
                    return Ok(done);
                };

                parser.skip_whitespace();
                match parent.left.take() {
                    None if parser.consume_if(b',') => {
                        // Right subtree follows
                        parent.left = Some(done);
                        open.push(parent);
                        break;
                    }
                    None => {
                        expect_close(parser)?;
                        done = Node::with_children(parent.value, Some(done), None);
                    }
                    Some(left) => {
                        expect_close(parser)?;
                        done = Node::with_children(parent.value, Some(left), Some(done));
                    }
                }
            }
        }
    }

    /// Parses a value token with the injected value parser.
    /// - Expects parser at the start of the token
    fn parse_value(&mut self, parser: &mut ByteParser) -> Result<T, ParsingError> {
        let start = parser.position();
        let token = parser.parse_token(STRUCTURAL_DELIMITERS);
        if token.is_empty() {
            return Err(ParsingError::malformed_notation(
                parser,
                format!("Expected value but found {}", describe(parser.peek())),
            ));
        }

        (self.value_parser)(&token)
            .map_err(|err| ParsingError::invalid_value(parser, start, format!("'{token}': {err}")))
    }
}

/// Rejects a group that does not start with a subtree, i.e. `(,` or `()`.
fn expect_left_subtree(parser: &mut ByteParser) -> Result<(), ParsingError> {
    parser.skip_whitespace();
    let msg = match parser.peek() {
        Some(b',') => "Expected left subtree before ','",
        Some(b')') => "Expected subtree between '(' and ')'",
        _ => return Ok(()),
    };
    Err(ParsingError::malformed_notation(parser, msg.to_string()))
}

/// Consumes the `)` closing a group of children.
fn expect_close(parser: &mut ByteParser) -> Result<(), ParsingError> {
    if parser.consume_if(b')') {
        return Ok(());
    }
    Err(ParsingError::malformed_notation(
        parser,
        format!("Expected ')' after children but found {}", describe(parser.peek())),
    ))
}

/// Describes an upcoming byte for error messages.
fn describe(byte: Option<u8>) -> String {
    match byte {
        Some(b) => format!("'{}'", b as char),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parsing_error::ParsingErrorType;

    fn int_parser() -> FromStrBracketParser<i32> {
        BracketParser::from_str_values()
    }

    #[test]
    fn test_error_positions() {
        let err = int_parser().parse_str("1 (2,").unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.position(), 5);

        let err = int_parser().parse_str("1 (x)").unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(Some(b')')), "')'");
        assert_eq!(describe(None), "end of input");
    }

    #[test]
    fn test_max_depth() {
        // Root at depth 0, deepest node at depth 3
        let notation = "1 (2 (3 (4)))";
        assert!(int_parser().with_max_depth(3).parse_str(notation).is_ok());

        let err = int_parser().with_max_depth(2).parse_str(notation).unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::MalformedNotation(msg) if msg.contains("deeper")));
    }

    #[test]
    fn test_custom_value_parser_with_state() {
        let mut seen = Vec::new();
        let tree = BracketParser::new(|token: &str| {
            seen.push(token.to_string());
            Ok::<_, String>(token.len())
        })
        .parse_str("abc (de, f)")
        .unwrap();

        assert_eq!(seen, vec!["abc", "de", "f"]);
        let values: Vec<usize> = tree.pre_order_iter().copied().collect();
        assert_eq!(values, vec![3, 2, 1]);
    }
}
