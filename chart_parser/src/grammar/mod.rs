//! Grammar model for the chart parser
//!
//! A grammar maps each nonterminal to its rules in the order they were
//! authored. That order matters: it decides which closure states enter the
//! chart first, and with it which derivation wins on ambiguous input.
//!
//! Grammars are read-only once built.

pub mod actions;
pub mod error;
pub mod rule;
pub mod shorthand;
pub mod symbol;
pub mod value;

use crate::logging::codes;
use crate::{log_debug, log_success};
use std::collections::HashMap;

pub use error::{GrammarError, GrammarResult};
pub use rule::{Action, AntiLookahead, Rule};
pub use shorthand::rule;
pub use symbol::{matches, Symbol};
pub use value::Value;

#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: HashMap<String, Vec<Rule>>,
    /// Nonterminals in first-seen order
    order: Vec<String>,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Rules for `nonterminal` in authored order
    pub fn rules_for(&self, nonterminal: &str) -> Option<&[Rule]> {
        self.rules.get(nonterminal).map(Vec::as_slice)
    }

    /// First authored rule of `nonterminal`, used to seed a parse
    pub fn start_rule(&self, nonterminal: &str) -> GrammarResult<&Rule> {
        self.rules_for(nonterminal)
            .and_then(|rules| rules.first())
            .ok_or_else(|| GrammarError::unknown_start_rule(nonterminal))
    }

    pub fn rule(&self, nonterminal: &str, index: usize) -> Option<&Rule> {
        self.rules_for(nonterminal).and_then(|rules| rules.get(index))
    }

    pub fn contains(&self, nonterminal: &str) -> bool {
        self.rules.contains_key(nonterminal)
    }

    pub fn nonterminals(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Every rule, grouped by nonterminal in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.order
            .iter()
            .filter_map(|name| self.rules.get(name))
            .flatten()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Collects rules in authored order
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    grammar: Grammar,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        for rule in rules {
            self.push(rule);
        }
        self
    }

    pub fn push(&mut self, rule: Rule) {
        let left = rule.left().to_string();
        log_debug!("Adding grammar rule", "rule" => &rule);

        match self.grammar.rules.get_mut(&left) {
            Some(existing) => existing.push(rule),
            None => {
                self.grammar.order.push(left.clone());
                self.grammar.rules.insert(left, vec![rule]);
            }
        }
    }

    pub fn build(self) -> Grammar {
        log_success!(
            codes::success::GRAMMAR_CONSTRUCTED,
            "Grammar constructed",
            "nonterminals" => self.grammar.order.len(),
            "rules" => self.grammar.rule_count()
        );
        self.grammar
    }
}

impl FromIterator<Rule> for Grammar {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        GrammarBuilder::new().rules(iter).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn expression_grammar() -> Grammar {
        Grammar::builder()
            .rule(rule("EXP int", Some("int"), actions::pick(0)).unwrap())
            .rule(rule("S EXP", None, actions::pick(0)).unwrap())
            .rule(rule("EXP EXP add EXP", Some("add"), actions::node_of("add", &[0, 2])).unwrap())
            .build()
    }

    #[test]
    fn test_rules_keep_authored_order() {
        let grammar = expression_grammar();
        let exp = grammar.rules_for("EXP").unwrap();

        assert_eq!(exp.len(), 2);
        assert_eq!(exp[0].tree_name(), Some("int"));
        assert_eq!(exp[1].tree_name(), Some("add"));
        assert_eq!(grammar.nonterminals().collect::<Vec<_>>(), vec!["EXP", "S"]);
        assert_eq!(grammar.rule_count(), 3);
    }

    #[test]
    fn test_start_rule_is_first_rule() {
        let grammar = expression_grammar();
        assert_eq!(grammar.start_rule("EXP").unwrap().tree_name(), Some("int"));
        assert_eq!(grammar.rule("EXP", 1).unwrap().rhs().len(), 3);
        assert!(grammar.rule("EXP", 2).is_none());
    }

    #[test]
    fn test_unknown_start_rule() {
        let grammar = expression_grammar();
        assert_matches!(
            grammar.start_rule("STM"),
            Err(GrammarError::UnknownStartRule { name }) if name == "STM"
        );
    }

    #[test]
    fn test_collect_from_rules() {
        let grammar: Grammar = vec![
            rule("S", None, actions::unit()).unwrap(),
            rule("S a", None, actions::unit()).unwrap(),
        ]
        .into_iter()
        .collect();

        assert!(grammar.contains("S"));
        assert_eq!(grammar.iter().count(), 2);
    }
}
