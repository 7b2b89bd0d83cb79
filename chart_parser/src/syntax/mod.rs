//! Syntax analysis module - token sequence to result value
//!
//! Runs the chart parser over a token sequence with any context-free
//! grammar. The result is the value built by the rule actions of the first
//! derivation that completes; failures carry the offending token's location.

mod chart;
mod error;
mod parser;
mod state;

pub use chart::Chart;
pub use error::{SyntaxError, SyntaxResult};
pub use parser::{ChartParser, ParseMetrics};
pub use state::{ParseState, StateKey};

use crate::config::runtime::SyntaxPreferences;
use crate::grammar::{Grammar, Value};
use crate::logging::codes;
use crate::tokens::Token;
use crate::{log_debug, log_success};

/// Parse `tokens` as nonterminal `start` with default limits and preferences
pub fn parse(grammar: &Grammar, tokens: Vec<Token>, start: &str) -> SyntaxResult<Value> {
    log_debug!("Starting syntax analysis", "tokens" => tokens.len(), "start" => start);
    ChartParser::new(grammar).parse(tokens, start)
}

/// Parse with custom runtime preferences
pub fn parse_with_preferences(
    grammar: &Grammar,
    tokens: Vec<Token>,
    start: &str,
    preferences: SyntaxPreferences,
) -> SyntaxResult<Value> {
    ChartParser::new(grammar)
        .with_preferences(preferences)
        .parse(tokens, start)
}

/// Initialize syntax module logging validation
pub fn init_syntax_logging() -> Result<(), String> {
    let syntax_codes = [
        codes::syntax::UNEXPECTED_END_OF_INPUT,
        codes::syntax::NO_DERIVATION,
        codes::syntax::UNKNOWN_NONTERMINAL,
        codes::syntax::UNEXPECTED_TOKEN,
        codes::syntax::CHART_LIMIT_EXCEEDED,
        codes::syntax::DEADLINE_EXCEEDED,
    ];

    for code in &syntax_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Syntax error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    log_success!(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Syntax logging validated",
        "codes" => syntax_codes.len()
    );
    Ok(())
}
