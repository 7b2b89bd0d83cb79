//! Source location tracking for tokens and diagnostics
//!
//! Tokens carry the span of the text they were recognized from, and both
//! lexical and syntax errors point back into the source through these types.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line, column, and byte offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Byte offset from start of input (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, counted in characters)
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The starting position (offset 0, line 1, column 1)
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advance position past one character. A newline moves to column 1 of
    /// the next line; every other character is one column wide.
    pub fn advance(self, ch: char) -> Self {
        match ch {
            '\n' => Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            },
            _ => Self {
                offset: self.offset + ch.len_utf8(),
                line: self.line,
                column: self.column + 1,
            },
        }
    }

    /// Advance position past a whole string
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, |pos, ch| pos.advance(ch))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.offset <= end.offset,
            "Span start must not be after end"
        );
        Self { start, end }
    }

    /// Zero-width span at a position
    pub fn empty_at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Byte length of this span
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        let start = if self.start.offset < other.start.offset {
            self.start
        } else {
            other.start
        };

        let end = if self.end.offset > other.end.offset {
            self.end
        } else {
            other.end
        };

        Self { start, end }
    }

    /// Source text covered by this span
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start.offset..self.end.offset]
    }

    /// Placeholder span for synthesized tokens in tests
    pub fn dummy() -> Self {
        Self::empty_at(Position::start())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Line index over a source text, used to render diagnostics
#[derive(Debug, Clone)]
pub struct SourceMap {
    pub source: String,
    /// Byte offsets of line starts
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut line_starts = vec![0];
        for (offset, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(offset + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Line and column for a byte offset
    pub fn position_at(&self, offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self.source[line_start..offset].chars().count();

        Position::new(offset, (line + 1) as u32, (column + 1) as u32)
    }

    /// A line of text by line number (1-based)
    pub fn get_line(&self, line_num: u32) -> Option<&str> {
        if line_num == 0 {
            return None;
        }

        let line_idx = (line_num - 1) as usize;
        if line_idx >= self.line_starts.len() {
            return None;
        }

        let start = self.line_starts[line_idx];
        let end = if line_idx + 1 < self.line_starts.len() {
            self.line_starts[line_idx + 1] - 1
        } else {
            self.source.len()
        };

        Some(self.source[start..end].trim_end_matches('\r'))
    }

    /// Format an error message with the offending line and a caret underline
    pub fn format_error(&self, span: &Span, message: &str) -> String {
        let mut result = String::new();

        result.push_str(&format!("error: {}\n", message));
        result.push_str(&format!(
            "  --> {}:{}\n",
            span.start.line, span.start.column
        ));

        if let Some(line) = self.get_line(span.start.line) {
            let line_num_str = format!("{}", span.start.line);
            let padding = " ".repeat(line_num_str.len());

            result.push_str(&format!(" {} |\n", padding));
            result.push_str(&format!("{} | {}\n", line_num_str, line));

            let mut underline = format!(" {} | ", padding);
            for _ in 1..span.start.column {
                underline.push(' ');
            }

            let span_len = if span.start.line == span.end.line {
                span.end.column.saturating_sub(span.start.column) as usize
            } else {
                line.chars().count().saturating_sub((span.start.column - 1) as usize)
            };

            for _ in 0..span_len.max(1) {
                underline.push('^');
            }

            result.push_str(&underline);
            result.push('\n');
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_advance_tracks_lines() {
        let pos = Position::start().advance_str("ab\ncd");
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);
        assert_eq!(pos.offset, 5);
    }

    #[test]
    fn test_position_advance_multibyte() {
        let pos = Position::start().advance('é');
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn test_span_merge() {
        let a = Span::new(Position::new(0, 1, 1), Position::new(2, 1, 3));
        let b = Span::new(Position::new(4, 1, 5), Position::new(6, 1, 7));
        let merged = a.merge(b);
        assert_eq!(merged.start.offset, 0);
        assert_eq!(merged.end.offset, 6);
        assert_eq!(merged.slice("abcdefgh"), "abcdef");
    }

    #[test]
    fn test_source_map_positions() {
        let map = SourceMap::new("one\ntwo\nthree");
        let pos = map.position_at(5);
        assert_eq!((pos.line, pos.column), (2, 2));
        assert_eq!(map.get_line(3), Some("three"));
        assert_eq!(map.get_line(4), None);
    }

    #[test]
    fn test_format_error_underlines_span() {
        let map = SourceMap::new("f(1 +, 2)");
        let start = map.position_at(5);
        let span = Span::new(start, start.advance(','));
        let rendered = map.format_error(&span, "unexpected ','");

        assert!(rendered.contains("--> 1:6"));
        assert!(rendered.contains("1 | f(1 +, 2)"));
        assert!(rendered.contains("     ^"));
    }
}
