// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether to count matches per token template
    pub collect_detailed_metrics: bool,

    /// Whether to log each dropped (skip) token at debug level
    pub log_dropped_tokens: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env_flag(env_vars::LEXICAL_DETAILED_METRICS, true),
            log_dropped_tokens: env_flag(env_vars::LEXICAL_LOG_DROPPED, false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxPreferences {
    /// Whether to log every chart state as it is processed (debug level)
    pub trace_chart: bool,

    /// Whether to log completions suppressed by an anti-lookahead
    pub log_suppressed_completions: bool,
}

impl Default for SyntaxPreferences {
    fn default() -> Self {
        Self {
            trace_chart: env_flag(env_vars::SYNTAX_TRACE_CHART, false),
            log_suppressed_completions: env_flag(env_vars::SYNTAX_LOG_SUPPRESSED, false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            enable_console_logging: env_flag(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Errors loading a runtime configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid runtime configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub syntax: SyntaxPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse preferences from TOML text. Missing sections and keys fall back
    /// to their environment-driven defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load preferences from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "CHART_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_LOG_DROPPED: &str = "CHART_LEXICAL_LOG_DROPPED";

    // Syntax
    pub const SYNTAX_TRACE_CHART: &str = "CHART_SYNTAX_TRACE_CHART";
    pub const SYNTAX_LOG_SUPPRESSED: &str = "CHART_SYNTAX_LOG_SUPPRESSED";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "CHART_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "CHART_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "CHART_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("2"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [syntax]
            trace_chart = true

            [logging]
            min_log_level = "Debug"
            "#,
        )
        .unwrap();

        assert!(config.syntax.trace_chart);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = RuntimeConfig::from_toml_str("[syntax\ntrace_chart = 1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[lexical]\nlog_dropped_tokens = true").unwrap();

        let config = RuntimeConfig::load(&path).unwrap();
        assert!(config.lexical.log_dropped_tokens);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RuntimeConfig::load("/nonexistent/chart.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
