//! Token templates: a name, a regular expression and an optional transform

use super::analyzer::LexerError;
use crate::grammar::Value;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Turns matched text into a token value; `None` drops the token
pub type Transform = Arc<dyn Fn(&str) -> Option<Value> + Send + Sync>;

#[derive(Clone)]
pub struct TokenTemplate {
    name: String,
    pattern: String,
    regex: Regex,
    transform: Option<Transform>,
}

impl TokenTemplate {
    /// Compile a template. The pattern is anchored at the scan offset, so
    /// `[0-9]+` only matches digits that start exactly where scanning is.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, LexerError> {
        let name = name.into();
        let regex = Regex::new(&format!(r"\A(?:{})", pattern))
            .map_err(|e| LexerError::invalid_pattern(&name, &e.to_string()))?;

        Ok(Self {
            name,
            pattern: pattern.to_string(),
            regex,
            transform: None,
        })
    }

    /// Template whose matches are consumed but never emitted (whitespace,
    /// comments)
    pub fn skip(name: impl Into<String>, pattern: &str) -> Result<Self, LexerError> {
        Ok(Self::new(name, pattern)?.with_transform(|_| None))
    }

    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> Option<Value> + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Matched prefix of `rest`. An empty match counts as no match so the
    /// scanner always makes progress.
    pub fn match_prefix<'s>(&self, rest: &'s str) -> Option<&'s str> {
        self.regex
            .find(rest)
            .map(|m| m.as_str())
            .filter(|matched| !matched.is_empty())
    }

    /// Token value for matched text; `None` means the token is dropped
    pub fn value_of(&self, matched: &str) -> Option<Value> {
        match &self.transform {
            Some(transform) => transform(matched),
            None => Some(Value::text(matched)),
        }
    }
}

impl fmt::Debug for TokenTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenTemplate")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("has_transform", &self.transform.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_match_is_anchored() {
        let int = TokenTemplate::new("int", "[0-9]+").unwrap();
        assert_eq!(int.match_prefix("42+1"), Some("42"));
        assert_eq!(int.match_prefix("a42"), None);
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let op = TokenTemplate::new("op", r"\+|-").unwrap();
        assert_eq!(op.match_prefix("x-1"), None);
        assert_eq!(op.match_prefix("-1"), Some("-"));
    }

    #[test]
    fn test_empty_match_is_no_match() {
        let spaces = TokenTemplate::new("space", " *").unwrap();
        assert_eq!(spaces.match_prefix("abc"), None);
        assert_eq!(spaces.match_prefix("  abc"), Some("  "));
    }

    #[test]
    fn test_values() {
        let word = TokenTemplate::new("word", "[a-z]+").unwrap();
        assert_eq!(word.value_of("abc"), Some(Value::text("abc")));

        let int = TokenTemplate::new("int", "[0-9]+")
            .unwrap()
            .with_transform(|s| s.parse::<i64>().ok().map(Value::Int));
        assert_eq!(int.value_of("17"), Some(Value::Int(17)));

        let space = TokenTemplate::skip("space", " +").unwrap();
        assert_eq!(space.value_of("   "), None);
    }

    #[test]
    fn test_invalid_pattern() {
        assert_matches!(
            TokenTemplate::new("bad", "(unclosed"),
            Err(LexerError::InvalidPattern { name, .. }) if name == "bad"
        );
    }
}
