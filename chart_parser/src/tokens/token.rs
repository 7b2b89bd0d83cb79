//! Token record produced by the tokenizer and consumed by the chart parser

use crate::grammar::Value;
use crate::utils::{Position, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the synthetic end-of-input token. The `$` keeps it apart from
/// any terminal a shorthand rule can name.
pub const END_MARKER: &str = "$end";

/// Immutable token: symbol name, semantic value and source location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub value: Value,
    pub span: Span,
}

impl Token {
    pub fn new(name: impl Into<String>, value: Value, span: Span) -> Self {
        Self {
            name: name.into(),
            value,
            span,
        }
    }

    /// End marker placed at the start of `last`, or at 1:1 for empty input
    pub fn end_marker(last: Option<&Token>) -> Self {
        let at = last.map(|t| t.span.start()).unwrap_or_else(Position::start);
        Self::new(END_MARKER, Value::Unit, Span::empty_at(at))
    }

    pub fn is_end_marker(&self) -> bool {
        self.name == END_MARKER
    }

    /// 1-based line of the token's first character
    pub fn line(&self) -> u32 {
        self.span.start().line
    }

    /// 1-based column of the token's first character
    pub fn col(&self) -> u32 {
        self.span.start().column
    }

    /// Byte offset where the token starts
    pub fn start(&self) -> usize {
        self.span.start().offset
    }

    /// Byte offset one past the token's last character
    pub fn end(&self) -> usize {
        self.span.end().offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end_marker() {
            write!(f, "end of input")
        } else {
            write!(f, "({}, \"{}\")", self.name, self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_accessors() {
        let start = Position::new(4, 2, 3);
        let end = start.advance_str("abc");
        let token = Token::new("word", Value::text("abc"), Span::new(start, end));

        assert_eq!(token.line(), 2);
        assert_eq!(token.col(), 3);
        assert_eq!(token.start(), 4);
        assert_eq!(token.end(), 7);
        assert_eq!(token.to_string(), "(word, \"abc\")");
    }

    #[test]
    fn test_end_marker_position() {
        let last = Token::new(
            "int",
            Value::Int(1),
            Span::new(Position::new(10, 3, 5), Position::new(11, 3, 6)),
        );
        let end = Token::end_marker(Some(&last));
        assert!(end.is_end_marker());
        assert_eq!((end.line(), end.col()), (3, 5));

        let empty = Token::end_marker(None);
        assert_eq!((empty.line(), empty.col()), (1, 1));
        assert_eq!(empty.to_string(), "end of input");
    }
}
