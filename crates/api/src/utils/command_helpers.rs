//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::time::Instant;

use tokentray_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution, STORAGE_ERROR_LABEL};

/// Execute a token-flow command with automatic timing and logging
///
/// # Example
///
/// ```rust,ignore
/// pub fn get_token(ctx: &AppContext, environment: &str) -> Result<String> {
///     execute_logged("token::get_token", || ctx.token_service.acquire_token(environment))
/// }
/// ```
pub fn execute_logged<F, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> DomainResult<T>,
{
    let start = Instant::now();

    let result = command_fn();

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), error_type);

    result
}

/// Execute a settings or file command whose errors are `anyhow` chains
pub fn execute_storage_logged<F, T>(command_name: &str, command_fn: F) -> anyhow::Result<T>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    let start = Instant::now();

    let result = command_fn();

    let error_type = result.as_ref().err().map(|_| STORAGE_ERROR_LABEL);
    log_command_execution(command_name, start.elapsed(), error_type);

    result
}
