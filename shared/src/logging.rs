//! Shared logging utilities for consistent tracing across components

use crate::types::ProcessId;
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

/// Build the filter directive for a process at the given base level
pub fn filter_directive(process_id: &ProcessId, base_level: &str) -> String {
    match process_id {
        // The snapshot server runs inside the orchestrator process
        ProcessId::Orchestrator => {
            format!("orchestrator={base_level},webserver={base_level},shared={base_level},tower_http={base_level},axum=warn")
        }
    }
}

/// Initialize the stdout tracing subscriber with an optional log level
///
/// `RUST_LOG`, when set, overrides the per-process directive.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let process_id = ProcessId::current();
    let base_level = log_level.unwrap_or("info");
    let directive = filter_directive(process_id, base_level);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    // try_init so repeated initialization (tests) is not an error
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for process-aware info logging
#[macro_export]
macro_rules! process_info {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::info!(
            process = %$process_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for process-aware debug logging
#[macro_export]
macro_rules! process_debug {
    ($process_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            process = %$process_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(process_id: &ProcessId, details: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(process_id: &ProcessId, reason: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(process_id: &ProcessId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        process = %process_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for recoverable failures
pub fn log_skipped(process_id: &ProcessId, context: &str, reason: &dyn std::fmt::Display) {
    warn!(
        process = %process_id,
        timestamp = format_timestamp(),
        reason = %reason,
        "⚠️ {} skipped: {}",
        context,
        reason
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(process_id: &ProcessId, message: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(process_id: &ProcessId, action: &str, details: &str) {
    info!(
        process = %process_id,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}
