//! Grammar symbols
//!
//! Terminal and nonterminal names live in separate variants so a symbol is
//! never compared against a token by accident. `matches` is the only place
//! where a symbol meets a token.

use crate::tokens::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Token name produced by the tokenizer
    Terminal(String),
    /// Left side of one or more rules
    Nonterminal(String),
}

impl Symbol {
    pub fn terminal(name: impl Into<String>) -> Self {
        Symbol::Terminal(name.into())
    }

    pub fn nonterminal(name: impl Into<String>) -> Self {
        Symbol::Nonterminal(name.into())
    }

    /// Classify a shorthand word: an ASCII uppercase first character marks
    /// a nonterminal.
    pub fn from_word(word: &str) -> Self {
        if word.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            Symbol::Nonterminal(word.to_string())
        } else {
            Symbol::Terminal(word.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(name) | Symbol::Nonterminal(name) => name,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A token satisfies a symbol only if the symbol is a terminal with the
/// token's name.
pub fn matches(symbol: &Symbol, token: &Token) -> bool {
    match symbol {
        Symbol::Terminal(name) => *name == token.name,
        Symbol::Nonterminal(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Value;
    use crate::utils::Span;

    #[test]
    fn test_from_word_classification() {
        assert_eq!(Symbol::from_word("EXP"), Symbol::nonterminal("EXP"));
        assert_eq!(Symbol::from_word("Args"), Symbol::nonterminal("Args"));
        assert_eq!(Symbol::from_word("int"), Symbol::terminal("int"));
        assert_eq!(Symbol::from_word("_x"), Symbol::terminal("_x"));
    }

    #[test]
    fn test_matches_by_name_only() {
        let token = Token::new("int", Value::Int(3), Span::dummy());

        assert!(matches(&Symbol::terminal("int"), &token));
        assert!(!matches(&Symbol::terminal("add"), &token));
        // Nonterminals never match, even with an equal name
        assert!(!matches(&Symbol::nonterminal("int"), &token));
    }
}
