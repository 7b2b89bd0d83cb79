//! Error codes and classification
//!
//! Single source of truth for every code the tokenizer, grammar builder and
//! chart parser emit, together with their behavioral metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Source input error codes
pub mod input {
    use super::Code;

    pub const FILE_READ_ERROR: Code = Code::new("E005");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const NO_MATCHING_TEMPLATE: Code = Code::new("E020");
    pub const INVALID_PATTERN: Code = Code::new("E021");
    pub const TOO_MANY_TOKENS: Code = Code::new("E027");
    pub const TOO_MANY_TEMPLATES: Code = Code::new("E028");
}

/// Grammar construction error codes
pub mod grammar {
    use super::Code;

    pub const EMPTY_RULE: Code = Code::new("E030");
    pub const INVALID_LEFT_SIDE: Code = Code::new("E031");
    pub const UNKNOWN_START_RULE: Code = Code::new("E032");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E040");
    pub const NO_DERIVATION: Code = Code::new("E043");
    pub const UNKNOWN_NONTERMINAL: Code = Code::new("E044");
    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const CHART_LIMIT_EXCEEDED: Code = Code::new("E087");
    pub const DEADLINE_EXCEEDED: Code = Code::new("E088");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const GRAMMAR_CONSTRUCTED: Code = Code::new("I030");
    pub const PARSE_COMPLETE: Code = Code::new("I040");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal system error",
                "File a bug report with the grammar and input that triggered it",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failure",
                "Check logging configuration",
            ),
            ErrorMetadata::new(
                "E005",
                "Input",
                Severity::Medium,
                false,
                true,
                "Source file could not be read",
                "Check that the path exists and contains UTF-8 text",
            ),
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                false,
                true,
                "No token template matches the input at this position",
                "Fix the input or add a template that recognizes this text",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::High,
                false,
                true,
                "Token template pattern is not a valid regular expression",
                "Fix the template's regular expression",
            ),
            ErrorMetadata::new(
                "E027",
                "Lexical",
                Severity::High,
                false,
                true,
                "Token count exceeds the configured limit",
                "Split the input or raise lexical.max_token_count",
            ),
            ErrorMetadata::new(
                "E028",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Too many token templates supplied",
                "Merge templates or raise lexical.max_template_count",
            ),
            ErrorMetadata::new(
                "E030",
                "Grammar",
                Severity::Medium,
                false,
                true,
                "Rewrite rule has no left-hand side",
                "Start the rule string with a nonterminal name",
            ),
            ErrorMetadata::new(
                "E031",
                "Grammar",
                Severity::Medium,
                false,
                true,
                "Left-hand side of a rule is not a nonterminal",
                "Nonterminal names start with an uppercase letter",
            ),
            ErrorMetadata::new(
                "E032",
                "Grammar",
                Severity::Medium,
                false,
                true,
                "Requested start rule does not exist in the grammar",
                "Check the start nonterminal name and rule index",
            ),
            ErrorMetadata::new(
                "E040",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Input ended before the grammar was satisfied",
                "Complete the input",
            ),
            ErrorMetadata::new(
                "E043",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Parsing reached the end of input without a derivation",
                "Check the start rule and the grammar's coverage of the input",
            ),
            ErrorMetadata::new(
                "E044",
                "Syntax",
                Severity::High,
                false,
                true,
                "Grammar references a nonterminal that has no rules",
                "Add rules for the nonterminal or fix its spelling",
            ),
            ErrorMetadata::new(
                "E050",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Token is not valid at this position",
                "Fix the input near the reported token",
            ),
            ErrorMetadata::new(
                "E087",
                "Syntax",
                Severity::High,
                false,
                true,
                "Chart grew beyond the configured state limit",
                "Reduce grammar ambiguity or raise syntax.max_chart_states",
            ),
            ErrorMetadata::new(
                "E088",
                "Syntax",
                Severity::Medium,
                false,
                true,
                "Parsing exceeded the caller-supplied deadline",
                "Allow more time or parse smaller inputs",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_error_codes_registered() {
        let codes = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            input::FILE_READ_ERROR,
            lexical::NO_MATCHING_TEMPLATE,
            lexical::INVALID_PATTERN,
            lexical::TOO_MANY_TOKENS,
            lexical::TOO_MANY_TEMPLATES,
            grammar::EMPTY_RULE,
            grammar::INVALID_LEFT_SIDE,
            grammar::UNKNOWN_START_RULE,
            syntax::UNEXPECTED_END_OF_INPUT,
            syntax::NO_DERIVATION,
            syntax::UNKNOWN_NONTERMINAL,
            syntax::UNEXPECTED_TOKEN,
            syntax::CHART_LIMIT_EXCEEDED,
            syntax::DEADLINE_EXCEEDED,
        ];

        for code in codes {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
            assert_ne!(get_description(code.as_str()), "Unknown error");
        }
    }

    #[test]
    fn test_syntax_errors_are_recoverable() {
        assert!(is_recoverable(syntax::UNEXPECTED_TOKEN.as_str()));
        assert!(!requires_halt(syntax::UNEXPECTED_TOKEN.as_str()));
        assert!(requires_halt(syntax::CHART_LIMIT_EXCEEDED.as_str()));
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_category("X999"), "Unknown");
        assert_eq!(get_severity("X999"), Severity::Medium);
        assert_eq!(get_action("X999"), "No specific action available");
    }
}
