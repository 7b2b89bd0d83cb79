//! Logging macros: a `Code`, a message and `"key" => value` context pairs.
//!
//! Context values only need `Display`. Nothing is formatted unless a global
//! logger is installed.

/// Attach context pairs to `event` and hand it to the global logger
#[doc(hidden)]
#[macro_export]
macro_rules! __emit_event {
    ($event:expr $(, $key:expr => $value:expr)*) => {{
        if let Some(logger) = $crate::logging::try_get_global_logger() {
            #[allow(unused_mut)]
            let mut event: $crate::logging::LogEvent = $event;
            $(
                event = event.with_context($key, &format!("{}", $value));
            )*
            logger.log_event(event);
        }
    }};
}

/// Error event with a code, optionally located with `span = ...`
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)*) => {
        $crate::__emit_event!(
            $crate::logging::LogEvent::error($code, $message).with_span($span)
            $(, $key => $value)*
        )
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__emit_event!(
            $crate::logging::LogEvent::error($code, $message)
            $(, $key => $value)*
        )
    };
}

/// Info event carrying a success code
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__emit_event!(
            $crate::logging::LogEvent::success($code, $message)
            $(, $key => $value)*
        )
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)*) => {
        $crate::__emit_event!($crate::logging::LogEvent::info($message) $(, $key => $value)*)
    };
}

/// Debug event; skipped entirely below the debug level
#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)*) => {{
        if $crate::logging::debug_enabled() {
            $crate::__emit_event!($crate::logging::LogEvent::debug($message) $(, $key => $value)*)
        }
    }};
}
