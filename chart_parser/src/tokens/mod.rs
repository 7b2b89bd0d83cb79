//! Tokens shared by the tokenizer and the chart parser
//!
//! A token carries the terminal name the grammar refers to, the semantic
//! value produced by its template, and the span it covers in the source.
//! Grammar symbols match tokens by name only; see [`crate::grammar::matches`].

pub mod token;

pub use token::{Token, END_MARKER};

// Re-export span types from utils
pub use crate::utils::{Position, SourceMap, Span};
