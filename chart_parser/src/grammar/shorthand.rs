//! Rule shorthand: `"EXP EXP add EXP"` reads as `EXP -> EXP add EXP`

use super::error::{GrammarError, GrammarResult};
use super::rule::Rule;
use super::symbol::Symbol;
use super::value::Value;

/// Build a rule from a whitespace-separated rewrite string.
///
/// The first word is the left side and must be a nonterminal. Remaining
/// words become the right side; words starting with an ASCII uppercase
/// letter are nonterminals, everything else is a terminal. A lone left side
/// gives an empty production. `tree_name` labels list results, see
/// [`Rule::apply`].
pub fn rule<F>(rewrite: &str, tree_name: Option<&str>, action: F) -> GrammarResult<Rule>
where
    F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
{
    let mut words = rewrite.split_whitespace();
    let left = words.next().ok_or(GrammarError::EmptyRule)?;

    if !Symbol::from_word(left).is_nonterminal() {
        return Err(GrammarError::invalid_left_side(left));
    }

    let rhs = words.map(Symbol::from_word).collect();
    let rule = Rule::new(left, rhs, action);

    Ok(match tree_name {
        Some(name) => rule.with_tree_name(name),
        None => rule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::actions;
    use assert_matches::assert_matches;

    #[test]
    fn test_shorthand_splits_symbols() {
        let r = rule("CALL ID pl ARGS pr", Some("call"), actions::node("call")).unwrap();

        assert_eq!(r.left(), "CALL");
        assert_eq!(
            r.rhs(),
            &[
                Symbol::nonterminal("ID"),
                Symbol::terminal("pl"),
                Symbol::nonterminal("ARGS"),
                Symbol::terminal("pr"),
            ]
        );
        assert_eq!(r.tree_name(), Some("call"));
    }

    #[test]
    fn test_lone_left_side_is_empty_rule() {
        let r = rule("S", None, actions::empty_list()).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.tree_name(), None);
    }

    #[test]
    fn test_rejects_bad_rewrites() {
        assert_matches!(rule("   ", None, actions::unit()), Err(GrammarError::EmptyRule));
        assert_matches!(
            rule("exp int", None, actions::unit()),
            Err(GrammarError::InvalidLeftSide { left }) if left == "exp"
        );
    }
}
