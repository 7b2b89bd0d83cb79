// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use grammar::{actions, rule, Grammar, GrammarError, Rule, Symbol, Value};
pub use lexical::{tokenize, LexerError, TokenTemplate};
pub use pipeline::{parse_file, parse_source, Pipeline, PipelineError, PipelineResult};
pub use syntax::{parse, ChartParser, SyntaxError};
pub use tokens::{Token, END_MARKER};
pub use utils::{Position, SourceMap, Span};

/// Initialize logging and validate the error code registry of every stage
pub fn init() -> Result<(), String> {
    logging::init_global_logging()?;
    lexical::validate_tokenization()?;
    syntax::init_syntax_logging()?;
    Ok(())
}
