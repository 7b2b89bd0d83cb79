//! Lexical analysis module
//!
//! Converts source text into tokens using an ordered list of regular
//! expression templates. See [`LexicalAnalyzer`] for the matching rules.

pub mod analyzer;
pub mod template;

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::tokens::Token;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};
pub use template::{TokenTemplate, Transform};

/// Tokenize `source` with default runtime preferences
pub fn tokenize(source: &str, templates: &[TokenTemplate]) -> Result<Vec<Token>, LexerError> {
    LexicalAnalyzer::new(templates).tokenize(source)
}

/// Tokenize with custom runtime preferences (limits remain compile-time)
pub fn tokenize_with_preferences(
    source: &str,
    templates: &[TokenTemplate],
    preferences: LexicalPreferences,
) -> Result<Vec<Token>, LexerError> {
    LexicalAnalyzer::with_preferences(templates, preferences).tokenize(source)
}

/// Check that every lexical error code is registered and the limits are sane
pub fn validate_tokenization() -> Result<(), String> {
    let lexical_codes = [
        crate::logging::codes::lexical::NO_MATCHING_TEMPLATE,
        crate::logging::codes::lexical::INVALID_PATTERN,
        crate::logging::codes::lexical::TOO_MANY_TOKENS,
        crate::logging::codes::lexical::TOO_MANY_TEMPLATES,
    ];

    for code in &lexical_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    if MAX_TOKEN_COUNT == 0 {
        return Err("MAX_TOKEN_COUNT cannot be zero".to_string());
    }
    if MAX_TEMPLATE_COUNT == 0 {
        return Err("MAX_TEMPLATE_COUNT cannot be zero".to_string());
    }

    crate::log_debug!("Lexical limits validated",
        "max_token_count" => MAX_TOKEN_COUNT,
        "max_template_count" => MAX_TEMPLATE_COUNT
    );

    Ok(())
}
