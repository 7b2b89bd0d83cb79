//! Template-driven lexical analyzer
//!
//! Scans left to right. At each offset the templates are tried in the order
//! given and the first one that matches a non-empty prefix wins; there is no
//! longest-match rule. Tokens record where they start, with 1-based lines
//! and character columns.

use super::template::TokenTemplate;
use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::Token;
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success};
use std::collections::HashMap;

/// Lexical analysis errors with compile-time limits
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error("No token template matches at line {line}, column {column}")]
    NoMatch {
        line: u32,
        column: u32,
        offset: usize,
    },

    #[error("Invalid pattern for template '{name}': {message}")]
    InvalidPattern { name: String, message: String },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },

    #[error("Too many token templates: {count} (max {MAX_TEMPLATE_COUNT})")]
    TooManyTemplates { count: usize },
}

impl LexerError {
    pub fn no_match(at: Position) -> Self {
        Self::NoMatch {
            line: at.line,
            column: at.column,
            offset: at.offset,
        }
    }

    pub fn invalid_pattern(name: &str, message: &str) -> Self {
        Self::InvalidPattern {
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::NoMatch { .. } => codes::lexical::NO_MATCHING_TEMPLATE,
            LexerError::InvalidPattern { .. } => codes::lexical::INVALID_PATTERN,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
            LexerError::TooManyTemplates { .. } => codes::lexical::TOO_MANY_TEMPLATES,
        }
    }

    /// Zero-width span at the failure point, for caret diagnostics
    pub fn span(&self) -> Option<Span> {
        match self {
            LexerError::NoMatch {
                line,
                column,
                offset,
            } => Some(Span::empty_at(Position::new(*offset, *line, *column))),
            _ => None,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}

/// Counters for one tokenization run
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub dropped_tokens: usize,
    pub bytes_scanned: usize,
    pub lines_scanned: u32,

    // Runtime preference-controlled metrics
    pub template_matches: HashMap<String, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_match(&mut self, template: &str, preferences: &LexicalPreferences) {
        if preferences.collect_detailed_metrics {
            *self.template_matches.entry(template.to_string()).or_insert(0) += 1;
        }
    }

    pub(crate) fn record_token(&mut self) {
        self.total_tokens += 1;
    }

    pub(crate) fn record_dropped(
        &mut self,
        template: &str,
        at: Position,
        preferences: &LexicalPreferences,
    ) {
        self.dropped_tokens += 1;

        if preferences.log_dropped_tokens {
            log_debug!("Token dropped",
                "template" => template,
                "line" => at.line,
                "column" => at.column
            );
        }
    }
}

/// Lexical analyzer over a borrowed, ordered template list
pub struct LexicalAnalyzer<'t> {
    templates: &'t [TokenTemplate],
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl<'t> LexicalAnalyzer<'t> {
    pub fn new(templates: &'t [TokenTemplate]) -> Self {
        Self {
            templates,
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(templates: &'t [TokenTemplate], preferences: LexicalPreferences) -> Self {
        Self {
            templates,
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Tokenize `source` into tokens in source order. Dropped tokens still
    /// advance the position.
    pub fn tokenize(&mut self, source: &str) -> Result<Vec<Token>, LexerError> {
        self.metrics = LexicalMetrics::default();

        if self.templates.len() > MAX_TEMPLATE_COUNT {
            let error = LexerError::TooManyTemplates {
                count: self.templates.len(),
            };
            log_error!(error.error_code(), "Template limit exceeded",
                "count" => self.templates.len(),
                "max" => MAX_TEMPLATE_COUNT
            );
            return Err(error);
        }

        log_debug!("Starting lexical analysis",
            "bytes" => source.len(),
            "templates" => self.templates.len(),
            "max_tokens_allowed" => MAX_TOKEN_COUNT
        );

        let mut tokens = Vec::new();
        let mut position = Position::start();

        while position.offset < source.len() {
            let rest = &source[position.offset..];

            let Some((template, matched)) = self
                .templates
                .iter()
                .find_map(|t| t.match_prefix(rest).map(|m| (t, m)))
            else {
                let error = LexerError::no_match(position);
                log_error!(error.error_code(), "No token template matches input",
                    span = Span::empty_at(position),
                    "line" => position.line,
                    "column" => position.column,
                    "found" => rest.chars().next().unwrap_or_default().escape_debug()
                );
                return Err(error);
            };

            let end = position.advance_str(matched);
            self.metrics.record_match(template.name(), &self.preferences);

            match template.value_of(matched) {
                Some(value) => {
                    if tokens.len() >= MAX_TOKEN_COUNT {
                        let error = LexerError::TooManyTokens {
                            count: tokens.len() + 1,
                        };
                        log_error!(error.error_code(), "Token limit exceeded",
                            span = Span::new(position, end),
                            "max" => MAX_TOKEN_COUNT
                        );
                        return Err(error);
                    }
                    tokens.push(Token::new(template.name(), value, Span::new(position, end)));
                    self.metrics.record_token();
                }
                None => self
                    .metrics
                    .record_dropped(template.name(), position, &self.preferences),
            }

            position = end;
        }

        self.metrics.bytes_scanned = position.offset;
        self.metrics.lines_scanned = if source.is_empty() { 0 } else { position.line };

        log_success!(
            codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed",
            "tokens" => self.metrics.total_tokens,
            "dropped" => self.metrics.dropped_tokens,
            "lines" => self.metrics.lines_scanned
        );

        Ok(tokens)
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }
}
