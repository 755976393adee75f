//! Cursor over the bytes of bracket notation.
//!
//! This module provides [ByteParser], which owns the whole input and offers
//! peeking, consuming, whitespace skipping and token extraction. The bracket
//! notation parser is built on top of it.

/// Default length of context provided by errors.
pub(crate) const DEFAULT_CONTEXT_LENGTH: usize = 30;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte cursor over owned ASCII text.
///
/// Positions are byte offsets into the input and never exceed its length.
///
/// # Example
/// ```
/// use bracktree::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  12 (3)");
/// parser.skip_whitespace();
/// assert_eq!(parser.parse_token(b"(),"), "12");
/// parser.skip_whitespace();
/// assert!(parser.consume_if(b'('));
/// ```
pub struct ByteParser {
    input: Vec<u8>,
    pos: usize,
}

impl ByteParser {
    /// Creates a new `ByteParser` from a string by copying it.
    pub fn for_str(input: &str) -> Self {
        Self::for_bytes(input.as_bytes().to_vec())
    }

    /// Creates a new `ByteParser` taking ownership of the given bytes.
    pub fn for_bytes(input: Vec<u8>) -> Self {
        Self { input, pos: 0 }
    }

    /// Peeks at the current byte without consuming it.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Gets the current byte and advances the position (consumes it).
    #[inline(always)]
    pub fn next(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Returns the current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Skips (consumes) all consecutive ASCII whitespace characters.
    pub fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.iter().take_while(|b| b.is_ascii_whitespace()).count();
    }

    /// Checks if the current byte is exactly `ch`.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Consumes the current byte if it is exactly `ch`.
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        let matched = self.peek_is(ch);
        if matched {
            self.pos += 1;
        }
        matched
    }

    /// Consumes and returns a token, i.e. the maximal run of bytes that are
    /// neither whitespace nor contained in `delimiters`.
    ///
    /// Returns an empty string if the parser is positioned at a delimiter,
    /// whitespace or EOF. Invalid UTF-8 is replaced lossily.
    pub fn parse_token(&mut self, delimiters: &[u8]) -> String {
        let rest = &self.input[self.pos..];
        let len = rest
            .iter()
            .position(|b| b.is_ascii_whitespace() || delimiters.contains(b))
            .unwrap_or(rest.len());
        let token = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.pos += len;
        token
    }

    /// Returns up to `k` upcoming bytes as a string for error reporting.
    pub fn get_context_as_string(&self, k: usize) -> String {
        let end = self.pos.saturating_add(k).min(self.input.len());
        String::from_utf8_lossy(&self.input[self.pos..end]).into_owned()
    }
}
