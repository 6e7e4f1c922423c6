use std::time::Duration;

use tokentray_domain::TokenError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"token::get_token"`).
/// * `elapsed` - Duration the command execution took.
/// * `error_type` - `None` on success, otherwise a stable error label.
///
/// Callers must avoid forwarding secrets in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => warn!(command, duration_ms, error_type, "command_execution_failure"),
    }
}

/// Convert a `TokenError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &TokenError) -> &'static str {
    error.label()
}

/// Label for failures outside the token flow (settings writes, log file).
pub const STORAGE_ERROR_LABEL: &str = "storage";
