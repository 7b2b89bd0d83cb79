//! Shared primitive types used by the tokenizer, the parser, and diagnostics.

pub mod span;

pub use span::{Position, SourceMap, Span};
