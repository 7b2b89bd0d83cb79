//! Global logging module for the chart parser
//!
//! Provides a process-wide logging service with coded events and a small
//! macro interface. Until `init_global_logging` is called every macro is a
//! no-op, so library users who do not care about logs pay nothing.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with a custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether a debug event would reach the global logger
pub fn debug_enabled() -> bool {
    try_get_global_logger()
        .map(|logger| logger.should_log(LogLevel::Debug))
        .unwrap_or(false)
}

/// Shared memory logger for tests. The global logger can only be installed
/// once per process, so every test module inspects the same buffer and
/// should assert on presence of events rather than exact counts.
#[cfg(test)]
pub(crate) fn test_memory_logger() -> Arc<MemoryLogger> {
    static MEMORY: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

    MEMORY
        .get_or_init(|| {
            let (service, memory) = service::create_test_service();
            let _ = init_global_logging_with_service(Arc::new(service));
            memory
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_reach_memory_logger() {
        let memory = test_memory_logger();

        crate::log_error!(codes::system::INTERNAL_ERROR, "macro error",
            "detail" => 42
        );
        crate::log_success!(codes::success::GRAMMAR_CONSTRUCTED, "macro success");
        crate::log_debug!("macro debug", "positions" => 3);

        assert!(is_initialized());
        assert!(debug_enabled());
        assert!(memory.has_error_with_code(codes::system::INTERNAL_ERROR));
        assert!(memory.has_success_with_code(codes::success::GRAMMAR_CONSTRUCTED));
        assert!(memory
            .get_events()
            .iter()
            .any(|e| e.is_debug() && e.context.get("positions") == Some(&"3".to_string())));
    }

    #[test]
    fn test_located_error_and_info_macros() {
        let memory = test_memory_logger();

        crate::log_error!(codes::syntax::UNEXPECTED_TOKEN, "located macro error",
            span = crate::utils::Span::dummy(),
            "token" => "pr"
        );
        crate::log_info!("macro info", "stage" => "lexical");

        let events = memory.get_events();
        assert!(events.iter().any(|e| e.is_error()
            && e.message == "located macro error"
            && e.span.is_some()
            && e.context.get("token").map(String::as_str) == Some("pr")));
        assert!(events
            .iter()
            .any(|e| e.is_info() && e.message == "macro info" && e.context.contains_key("stage")));
    }

    #[test]
    fn test_second_initialization_fails() {
        let _ = test_memory_logger();
        let (service, _) = service::create_test_service();
        assert!(init_global_logging_with_service(Arc::new(service)).is_err());
    }
}
