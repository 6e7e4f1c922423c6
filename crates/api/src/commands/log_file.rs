//! Failure log location

use std::path::PathBuf;

use anyhow::Context;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_storage_logged;

/// Path of the failure log, creating an empty file first if none exists so
/// it can always be opened.
///
/// # Errors
/// Returns an error if the log directory or file cannot be created.
pub fn log_file_path(ctx: &AppContext) -> anyhow::Result<PathBuf> {
    execute_storage_logged("log_file::log_file_path", || {
        ctx.failure_log.ensure_exists().with_context(|| {
            format!("Failed to create log file {}", ctx.failure_log.path().display())
        })?;
        Ok(ctx.failure_log.path().to_path_buf())
    })
}
