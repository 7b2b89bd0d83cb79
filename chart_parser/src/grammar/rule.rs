//! Production rules
//!
//! A rule rewrites one nonterminal into a sequence of symbols. When the
//! parser completes a rule it hands the ordered right-side values to the
//! rule's action, unless the next token is in the anti-lookahead set.

use super::symbol::Symbol;
use super::value::Value;
use crate::tokens::Token;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Tree-building callback: right-side values in, one value out
pub type Action = Arc<dyn Fn(Vec<Value>) -> Value + Send + Sync>;

/// Terminal names before which a rule must not be completed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AntiLookahead {
    names: BTreeSet<String>,
}

impl AntiLookahead {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Whether completion is suppressed before `token`
    pub fn blocks(&self, token: &Token) -> bool {
        self.contains(&token.name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[derive(Clone)]
pub struct Rule {
    left: String,
    rhs: Vec<Symbol>,
    tree_name: Option<String>,
    action: Action,
    anti_lookahead: AntiLookahead,
}

impl Rule {
    pub fn new<F>(left: impl Into<String>, rhs: Vec<Symbol>, action: F) -> Self
    where
        F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
    {
        Self {
            left: left.into(),
            rhs,
            tree_name: None,
            action: Arc::new(action),
            anti_lookahead: AntiLookahead::default(),
        }
    }

    pub fn with_tree_name(mut self, name: impl Into<String>) -> Self {
        self.tree_name = Some(name.into());
        self
    }

    pub fn with_anti_lookahead<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anti_lookahead = AntiLookahead::new(names);
        self
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    pub fn tree_name(&self) -> Option<&str> {
        self.tree_name.as_deref()
    }

    pub fn anti_lookahead(&self) -> &AntiLookahead {
        &self.anti_lookahead
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Run the action over the collected right-side values. A named rule
    /// turns a list result into a node carrying its tree name.
    pub fn apply(&self, values: Vec<Value>) -> Value {
        match ((self.action)(values), &self.tree_name) {
            (Value::List(children), Some(name)) => Value::node(name.as_str(), children),
            (value, _) => value,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("left", &self.left)
            .field("rhs", &self.rhs)
            .field("tree_name", &self.tree_name)
            .field("anti_lookahead", &self.anti_lookahead)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.left)?;
        for symbol in &self.rhs {
            write!(f, " {}", symbol)?;
        }
        if !self.anti_lookahead.is_empty() {
            let names: Vec<&str> = self.anti_lookahead.iter().collect();
            write!(f, " !{{{}}}", names.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    #[test]
    fn test_apply_runs_action() {
        let rule = Rule::new(
            "EXP",
            vec![Symbol::terminal("int")],
            |mut values: Vec<Value>| values.remove(0),
        );
        assert_eq!(rule.apply(vec![Value::Int(9)]), Value::Int(9));
    }

    #[test]
    fn test_tree_name_labels_list_results() {
        let named = Rule::new("EXP", vec![Symbol::terminal("int")], Value::List)
            .with_tree_name("int");
        assert_eq!(
            named.apply(vec![Value::Int(7)]),
            Value::node("int", vec![Value::Int(7)])
        );

        let unnamed = Rule::new("EXP", vec![Symbol::terminal("int")], Value::List);
        assert_eq!(
            unnamed.apply(vec![Value::Int(7)]),
            Value::List(vec![Value::Int(7)])
        );

        // Non-list results pass through untouched
        let forwarded = Rule::new("EXP", vec![Symbol::terminal("int")], |mut v: Vec<Value>| {
            v.remove(0)
        })
        .with_tree_name("int");
        assert_eq!(forwarded.apply(vec![Value::Int(7)]), Value::Int(7));
    }

    #[test]
    fn test_anti_lookahead_blocks_named_tokens() {
        let rule = Rule::new("EXP", vec![], |_| Value::Unit).with_anti_lookahead(["mul"]);

        let mul = Token::new("mul", Value::text("*"), Span::dummy());
        let add = Token::new("add", Value::text("+"), Span::dummy());
        assert!(rule.anti_lookahead().blocks(&mul));
        assert!(!rule.anti_lookahead().blocks(&add));
    }

    #[test]
    fn test_display() {
        let rule = Rule::new(
            "EXP",
            vec![
                Symbol::nonterminal("EXP"),
                Symbol::terminal("add"),
                Symbol::nonterminal("EXP"),
            ],
            |_| Value::Unit,
        )
        .with_anti_lookahead(["mul", "div"]);

        assert_eq!(rule.to_string(), "EXP -> EXP add EXP !{div, mul}");
    }
}
