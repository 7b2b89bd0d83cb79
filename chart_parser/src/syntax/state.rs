//! Parse states: a rule with a dot, an origin and the values seen so far
//!
//! States are never mutated after they enter the chart. Advancing the dot
//! builds a new state with one more collected value.

use crate::grammar::{Rule, Symbol, Value};
use std::fmt;

/// Structural identity of a state. Accumulated values are not part of it,
/// so two derivations reaching the same item collapse into the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey<'g> {
    pub left: &'g str,
    pub seen: &'g [Symbol],
    pub unseen: &'g [Symbol],
    pub origin: usize,
}

#[derive(Debug, Clone)]
pub struct ParseState<'g> {
    rule: &'g Rule,
    dot: usize,
    origin: usize,
    partial: Vec<Value>,
}

impl<'g> ParseState<'g> {
    /// Fresh state with nothing seen, predicted at `origin`
    pub fn initial(rule: &'g Rule, origin: usize) -> Self {
        Self {
            rule,
            dot: 0,
            origin,
            partial: Vec::new(),
        }
    }

    pub fn rule(&self) -> &'g Rule {
        self.rule
    }

    pub fn left(&self) -> &'g str {
        self.rule.left()
    }

    pub fn seen(&self) -> &'g [Symbol] {
        &self.rule.rhs()[..self.dot]
    }

    pub fn unseen(&self) -> &'g [Symbol] {
        &self.rule.rhs()[self.dot..]
    }

    pub fn dot(&self) -> usize {
        self.dot
    }

    pub fn origin(&self) -> usize {
        self.origin
    }

    pub fn partial(&self) -> &[Value] {
        &self.partial
    }

    /// Symbol right after the dot
    pub fn next_symbol(&self) -> Option<&'g Symbol> {
        self.rule.rhs().get(self.dot)
    }

    pub fn is_complete(&self) -> bool {
        self.dot == self.rule.rhs().len()
    }

    /// Whether the dot sits before nonterminal `name`
    pub fn awaits(&self, name: &str) -> bool {
        matches!(self.next_symbol(), Some(Symbol::Nonterminal(n)) if n == name)
    }

    /// New state with the dot moved past one symbol and `value` collected
    pub fn advance(&self, value: Value) -> Self {
        debug_assert!(!self.is_complete(), "cannot advance a complete state");

        let mut partial = Vec::with_capacity(self.partial.len() + 1);
        partial.extend(self.partial.iter().cloned());
        partial.push(value);

        Self {
            rule: self.rule,
            dot: self.dot + 1,
            origin: self.origin,
            partial,
        }
    }

    /// Run the rule's action over the collected values
    pub fn build_value(&self) -> Value {
        self.rule.apply(self.partial.clone())
    }

    pub fn key(&self) -> StateKey<'g> {
        StateKey {
            left: self.left(),
            seen: self.seen(),
            unseen: self.unseen(),
            origin: self.origin,
        }
    }
}

impl fmt::Display for ParseState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.left())?;
        for symbol in self.seen() {
            write!(f, " {}", symbol)?;
        }
        write!(f, " .")?;
        for symbol in self.unseen() {
            write!(f, " {}", symbol)?;
        }
        write!(f, " from {}", self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{actions, rule};

    #[test]
    fn test_advance_preserves_original() {
        let add = rule("EXP EXP add EXP", Some("add"), actions::node_of("add", &[0, 2])).unwrap();
        let state = ParseState::initial(&add, 2);
        let next = state.advance(Value::Int(1));

        assert_eq!(state.dot(), 0);
        assert!(state.partial().is_empty());
        assert_eq!(next.dot(), 1);
        assert_eq!(next.partial(), &[Value::Int(1)]);
        assert_eq!(next.origin(), 2);
        assert_eq!(next.seen().len() + next.unseen().len(), add.rhs().len());
        assert!(!next.awaits("EXP"));
        assert!(state.awaits("EXP"));
        assert_eq!(next.next_symbol(), Some(&Symbol::terminal("add")));
        assert_eq!(next.to_string(), "EXP -> EXP . add EXP from 2");
    }

    #[test]
    fn test_key_ignores_values() {
        let int = rule("EXP int", None, actions::pick(0)).unwrap();
        let a = ParseState::initial(&int, 0).advance(Value::Int(1));
        let b = ParseState::initial(&int, 0).advance(Value::Int(2));
        let c = ParseState::initial(&int, 1).advance(Value::Int(1));

        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert!(a.is_complete());
        assert_eq!(a.build_value(), Value::Int(1));
    }
}
