//! Syntax errors raised by the chart parser
//!
//! Every variant maps to a logging code so errors and log events share one
//! registry of descriptions, severities and recommended actions.

use crate::logging::{codes, Code};
use crate::tokens::Token;
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    /// No parse state survived past the token at `token_index`
    #[error("Unexpected {name} '{found}' at line {line}, column {column}")]
    UnexpectedToken {
        name: String,
        found: String,
        token_index: usize,
        line: u32,
        column: u32,
        span: Span,
    },

    #[error("Unexpected end of input at line {line}, column {column}")]
    UnexpectedEndOfInput {
        token_index: usize,
        line: u32,
        column: u32,
        span: Span,
    },

    /// Every position was processed but the start rule never completed
    #[error("No derivation of the start rule after {positions} chart positions")]
    NoDerivation { positions: usize },

    #[error("Unknown nonterminal '{name}': no rules are defined for it")]
    UnknownNonterminal { name: String },

    #[error("Chart limit exceeded: {states} parse states (max {limit})")]
    ChartLimitExceeded { states: usize, limit: usize },

    #[error("Parse deadline exceeded at chart position {position}")]
    DeadlineExceeded { position: usize },
}

impl SyntaxError {
    /// Error for the token after which the chart went empty
    pub fn unexpected(token: &Token, token_index: usize) -> Self {
        if token.is_end_marker() {
            Self::UnexpectedEndOfInput {
                token_index,
                line: token.line(),
                column: token.col(),
                span: token.span,
            }
        } else {
            Self::UnexpectedToken {
                name: token.name.clone(),
                found: token.value.to_string(),
                token_index,
                line: token.line(),
                column: token.col(),
                span: token.span,
            }
        }
    }

    pub fn unknown_nonterminal(name: &str) -> Self {
        Self::UnknownNonterminal {
            name: name.to_string(),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
            Self::NoDerivation { .. } => codes::syntax::NO_DERIVATION,
            Self::UnknownNonterminal { .. } => codes::syntax::UNKNOWN_NONTERMINAL,
            Self::ChartLimitExceeded { .. } => codes::syntax::CHART_LIMIT_EXCEEDED,
            Self::DeadlineExceeded { .. } => codes::syntax::DEADLINE_EXCEEDED,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnexpectedToken { span, .. } | Self::UnexpectedEndOfInput { span, .. } => {
                Some(*span)
            }
            Self::NoDerivation { .. }
            | Self::UnknownNonterminal { .. }
            | Self::ChartLimitExceeded { .. }
            | Self::DeadlineExceeded { .. } => None,
        }
    }

    /// Index of the offending token, when the error points at one
    pub fn token_index(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { token_index, .. }
            | Self::UnexpectedEndOfInput { token_index, .. } => Some(*token_index),
            _ => None,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn description(&self) -> &'static str {
        codes::get_description(self.error_code().as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Value;
    use crate::utils::Position;
    use assert_matches::assert_matches;

    #[test]
    fn test_unexpected_token_carries_location() {
        let token = Token::new(
            "pr",
            Value::text(")"),
            Span::new(Position::new(7, 2, 4), Position::new(8, 2, 5)),
        );
        let error = SyntaxError::unexpected(&token, 3);

        assert_matches!(
            &error,
            SyntaxError::UnexpectedToken { line: 2, column: 4, token_index: 3, .. }
        );
        assert_eq!(error.to_string(), "Unexpected pr ')' at line 2, column 4");
        assert_eq!(error.error_code(), codes::syntax::UNEXPECTED_TOKEN);
        assert_eq!(error.token_index(), Some(3));
    }

    #[test]
    fn test_end_marker_becomes_end_of_input() {
        let error = SyntaxError::unexpected(&Token::end_marker(None), 0);
        assert_matches!(error, SyntaxError::UnexpectedEndOfInput { token_index: 0, .. });
        assert!(error.span().is_some());
    }

    #[test]
    fn test_resource_errors_halt() {
        let error = SyntaxError::ChartLimitExceeded {
            states: 11,
            limit: 10,
        };
        assert!(error.requires_halt());
        assert!(!error.is_recoverable());
        assert!(error.span().is_none());
    }
}
