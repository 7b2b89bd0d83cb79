//! Configuration module for the chart parser
//! Resource limits are generated at build time from the TOML profile in
//! `config/`; user preferences are read at runtime.

// Generated by build.rs from config/<profile>.toml
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

pub use runtime::{LexicalPreferences, LoggingPreferences, RuntimeConfig, SyntaxPreferences};

/// Build information and configuration metadata
pub mod build_info {
    /// Configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("CHART_BUILD_PROFILE").unwrap_or("development")
    }

    /// Configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("CHART_CONFIG_DIR").unwrap_or("config")
    }

    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::{lexical, logging, syntax};

    #[test]
    fn test_generated_limits_are_sane() {
        assert!(lexical::MAX_TOKEN_COUNT > 0);
        assert!(lexical::MAX_TEMPLATE_COUNT > 0);
        assert!(syntax::MAX_CHART_STATES > 0);
        assert!(logging::LOG_BUFFER_SIZE >= 100);
        assert!(logging::MAX_LOG_MESSAGE_LENGTH > 0);
    }

    #[test]
    fn test_build_info() {
        assert!(super::build_info::source_info().ends_with(".toml"));
    }
}
