//! Text or file in, result value out: tokenizer and chart parser in one call

mod error;
mod result;

pub use error::PipelineError;
pub use result::PipelineResult;

use crate::config::runtime::{LexicalPreferences, SyntaxPreferences};
use crate::grammar::{Grammar, Value};
use crate::lexical::{LexicalAnalyzer, TokenTemplate};
use crate::syntax::ChartParser;
use std::path::Path;
use std::time::{Duration, Instant};

/// Templates, grammar and start nonterminal bundled for repeated use
pub struct Pipeline<'a> {
    templates: &'a [TokenTemplate],
    grammar: &'a Grammar,
    start: &'a str,
    lexical_preferences: LexicalPreferences,
    syntax_preferences: SyntaxPreferences,
    deadline: Option<Duration>,
}

impl<'a> Pipeline<'a> {
    pub fn new(templates: &'a [TokenTemplate], grammar: &'a Grammar, start: &'a str) -> Self {
        Self {
            templates,
            grammar,
            start,
            lexical_preferences: LexicalPreferences::default(),
            syntax_preferences: SyntaxPreferences::default(),
            deadline: None,
        }
    }

    pub fn with_lexical_preferences(mut self, preferences: LexicalPreferences) -> Self {
        self.lexical_preferences = preferences;
        self
    }

    pub fn with_syntax_preferences(mut self, preferences: SyntaxPreferences) -> Self {
        self.syntax_preferences = preferences;
        self
    }

    /// Deadline for the parsing stage
    pub fn with_deadline(mut self, timeout: Duration) -> Self {
        self.deadline = Some(timeout);
        self
    }

    /// Tokenize and parse `source`, keeping the metrics of both stages
    pub fn process_source(&self, source: &str) -> Result<PipelineResult, PipelineError> {
        let start_time = Instant::now();

        let mut analyzer =
            LexicalAnalyzer::with_preferences(self.templates, self.lexical_preferences.clone());
        let tokens = analyzer.tokenize(source)?;

        let mut parser = ChartParser::new(self.grammar)
            .with_preferences(self.syntax_preferences.clone());
        if let Some(timeout) = self.deadline {
            parser = parser.with_deadline(timeout);
        }
        let value = parser.parse(tokens, self.start)?;

        Ok(PipelineResult::new(
            value,
            analyzer.metrics().clone(),
            parser.metrics().clone(),
            source.len(),
            start_time.elapsed(),
        ))
    }

    pub fn parse_source(&self, source: &str) -> Result<Value, PipelineError> {
        self.process_source(source).map(|result| result.value)
    }

    /// Read a UTF-8 file and run it through both stages
    pub fn process_file(&self, path: impl AsRef<Path>) -> Result<PipelineResult, PipelineError> {
        let path = path.as_ref();
        crate::log_info!("Starting parsing pipeline", "file" => path.display());

        let source = std::fs::read_to_string(path).map_err(|e| {
            let error = PipelineError::io(path, e);
            crate::log_error!(error.error_code(), "Failed to read source file",
                "file" => path.display(),
                "error" => &error
            );
            error
        })?;

        let result = self.process_source(&source)?;
        result.log_success(&path.display().to_string());
        Ok(result)
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Value, PipelineError> {
        self.process_file(path).map(|result| result.value)
    }
}

/// Tokenize `source` with `templates` and parse it as `start`
pub fn parse_source(
    source: &str,
    templates: &[TokenTemplate],
    grammar: &Grammar,
    start: &str,
) -> Result<Value, PipelineError> {
    Pipeline::new(templates, grammar, start).parse_source(source)
}

/// Read `path` and parse its contents as `start`
pub fn parse_file(
    path: impl AsRef<Path>,
    templates: &[TokenTemplate],
    grammar: &Grammar,
    start: &str,
) -> Result<Value, PipelineError> {
    Pipeline::new(templates, grammar, start).parse_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{actions, rule};
    use crate::lexical::LexerError;
    use crate::logging::codes;
    use crate::syntax::SyntaxError;
    use assert_matches::assert_matches;
    use std::io::Write;

    fn call_templates() -> Vec<TokenTemplate> {
        vec![
            TokenTemplate::new("word", "[A-Za-z]+").unwrap(),
            TokenTemplate::new("pl", r"\(").unwrap(),
            TokenTemplate::new("pr", r"\)").unwrap(),
            TokenTemplate::new("int", "[0-9]+")
                .unwrap()
                .with_transform(|s| s.parse().ok().map(Value::Int)),
            TokenTemplate::new("comma", ",").unwrap(),
            TokenTemplate::new("add", r"\+").unwrap(),
            TokenTemplate::skip("space", "[ \t]+").unwrap(),
            TokenTemplate::skip("newline", "\n").unwrap(),
        ]
    }

    fn call_grammar() -> Grammar {
        Grammar::builder()
            .rule(rule("S CALL", None, actions::pick(0)).unwrap())
            .rule(rule("CALL ID pl ARGS pr", Some("call"), actions::select(&[0, 2])).unwrap())
            .rule(rule("ID word", None, actions::pick(0)).unwrap())
            .rule(rule("ARGS EXP comma ARGS", None, actions::cons(0, 2)).unwrap())
            .rule(rule("ARGS EXP", None, actions::list()).unwrap())
            .rule(rule("EXP int", Some("int"), actions::pick(0)).unwrap())
            .rule(rule("EXP EXP add EXP", Some("add"), actions::select(&[0, 2])).unwrap())
            .rule(rule("EXP CALL", None, actions::pick(0)).unwrap())
            .build()
    }

    fn add(a: Value, b: Value) -> Value {
        Value::node("add", vec![a, b])
    }

    #[test]
    fn test_call_end_to_end() {
        let templates = call_templates();
        let grammar = call_grammar();

        let result = parse_source("f(1+2,3)", &templates, &grammar, "S").unwrap();
        assert_eq!(
            result,
            Value::node(
                "call",
                vec![
                    Value::text("f"),
                    Value::List(vec![add(Value::Int(1), Value::Int(2)), Value::Int(3)]),
                ]
            )
        );
        assert_eq!(result.to_string(), "call(f, [add(1, 2), 3])");
    }

    #[test]
    fn test_nested_call_with_whitespace() {
        let templates = call_templates();
        let grammar = call_grammar();

        let result = parse_source("f (g(1) + 2)", &templates, &grammar, "S").unwrap();
        assert_eq!(result.to_string(), "call(f, [add(call(g, [1]), 2)])");
    }

    #[test]
    fn test_process_source_collects_metrics() {
        let templates = call_templates();
        let grammar = call_grammar();

        let result = Pipeline::new(&templates, &grammar, "S")
            .with_deadline(Duration::from_secs(30))
            .process_source("f(1, 2)")
            .unwrap();

        assert_eq!(result.token_count, 6);
        assert_eq!(result.lexical_metrics.dropped_tokens, 1);
        assert_eq!(result.source_bytes, 7);
        assert!(result.parse_metrics.states_created > 0);
        assert!(result.parse_metrics.shifts >= 6);
    }

    #[test]
    fn test_lexical_error_location() {
        let templates = call_templates();
        let grammar = call_grammar();
        let source = "f(1)\nf(2)\nf(12?)";

        let error = parse_source(source, &templates, &grammar, "S").unwrap_err();
        assert_matches!(
            error,
            PipelineError::LexicalAnalysis(LexerError::NoMatch { line: 3, column: 5, .. })
        );
        assert!(error.diagnostic(source).contains("--> 3:5"));
        assert_eq!(error.error_code(), codes::lexical::NO_MATCHING_TEMPLATE);
    }

    #[test]
    fn test_syntax_error_diagnostic_points_at_token() {
        let templates = call_templates();
        let grammar = call_grammar();
        let source = "f(1,\n  2 3)";

        let error = parse_source(source, &templates, &grammar, "S").unwrap_err();
        assert_matches!(
            &error,
            PipelineError::SyntaxAnalysis(SyntaxError::UnexpectedToken { line: 2, column: 5, .. })
        );

        let diagnostic = error.diagnostic(source);
        assert!(diagnostic.contains("--> 2:5"));
        assert!(diagnostic.contains("2 |   2 3)"));
        assert!(diagnostic.ends_with("    ^\n"));
    }

    #[test]
    fn test_empty_source() {
        let templates = call_templates();

        let empty_ok = Grammar::builder()
            .rule(rule("S", None, actions::empty_list()).unwrap())
            .build();
        assert_eq!(
            parse_source("", &templates, &empty_ok, "S").unwrap(),
            Value::List(vec![])
        );

        let error = parse_source("", &templates, &call_grammar(), "S").unwrap_err();
        assert_matches!(
            error,
            PipelineError::SyntaxAnalysis(SyntaxError::UnexpectedEndOfInput { token_index: 0, .. })
        );
    }

    #[test]
    fn test_parse_file() {
        let templates = call_templates();
        let grammar = call_grammar();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sum(1 + 2 + 3)").unwrap();

        let result = parse_file(file.path(), &templates, &grammar, "S").unwrap();
        assert_eq!(
            result.to_string(),
            "call(sum, [add(add(1, 2), 3)])"
        );
    }

    #[test]
    fn test_missing_file() {
        let templates = call_templates();
        let grammar = call_grammar();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let error = parse_file(&path, &templates, &grammar, "S").unwrap_err();
        assert_matches!(&error, PipelineError::Io { path: p, .. } if p == &path);
        assert_eq!(error.error_code(), codes::input::FILE_READ_ERROR);
        assert!(error.diagnostic("").starts_with("error: Failed to read"));
    }
}
