//! Grammar construction errors

use crate::logging::{codes, Code};

pub type GrammarResult<T> = Result<T, GrammarError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrammarError {
    #[error("Empty rule string: a rule needs at least a left-side nonterminal")]
    EmptyRule,

    #[error("Invalid left side '{left}': the left side of a rule must be a nonterminal")]
    InvalidLeftSide { left: String },

    #[error("Unknown start rule '{name}': no rules are defined for it")]
    UnknownStartRule { name: String },
}

impl GrammarError {
    pub fn invalid_left_side(left: &str) -> Self {
        Self::InvalidLeftSide {
            left: left.to_string(),
        }
    }

    pub fn unknown_start_rule(name: &str) -> Self {
        Self::UnknownStartRule {
            name: name.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Self::EmptyRule => codes::grammar::EMPTY_RULE,
            Self::InvalidLeftSide { .. } => codes::grammar::INVALID_LEFT_SIDE,
            Self::UnknownStartRule { .. } => codes::grammar::UNKNOWN_START_RULE,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    pub fn description(&self) -> &'static str {
        codes::get_description(self.error_code().as_str())
    }
}
