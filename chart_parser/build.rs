// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    syntax: SyntaxLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_token_count: usize,
    max_template_count: usize,
}

#[derive(serde::Deserialize)]
struct SyntaxLimits {
    max_chart_states: usize,
    max_trace_states: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CHART_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=CHART_CONFIG_DIR");

    let profile = env::var("CHART_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("CHART_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Config directory lives at the workspace root, one level above this crate
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_TOKENS: usize = 100_000_000;
    const ABSOLUTE_MAX_CHART_STATES: usize = 1_000_000_000;

    if config.lexical.max_token_count == 0 || config.lexical.max_token_count > ABSOLUTE_MAX_TOKENS
    {
        panic!("LIMITS: lexical.max_token_count must be in 1..={ABSOLUTE_MAX_TOKENS}");
    }

    if config.lexical.max_template_count == 0 {
        panic!("LIMITS: lexical.max_template_count cannot be zero");
    }

    if config.syntax.max_chart_states == 0
        || config.syntax.max_chart_states > ABSOLUTE_MAX_CHART_STATES
    {
        panic!("LIMITS: syntax.max_chart_states must be in 1..={ABSOLUTE_MAX_CHART_STATES}");
    }

    if config.logging.log_buffer_size < 100 {
        panic!("LIMITS: logging.log_buffer_size must be at least 100");
    }

    if profile == "production" && config.syntax.max_trace_states > 10_000 {
        panic!("PRODUCTION: syntax.max_trace_states too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const MAX_TOKEN_COUNT: usize = {};
        pub const MAX_TEMPLATE_COUNT: usize = {};
    }}

    pub mod syntax {{
        pub const MAX_CHART_STATES: usize = {};
        pub const MAX_TRACE_STATES: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.lexical.max_token_count,
        config.lexical.max_template_count,
        config.syntax.max_chart_states,
        config.syntax.max_trace_states,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
