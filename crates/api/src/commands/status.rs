//! Readiness of every known environment

use std::fmt::Write as _;

use tokentray_core::EnvironmentStatus;

use crate::context::AppContext;

/// Readiness of the default environments plus any extra ones on file.
///
/// Never fails: a missing or broken config file reports everything as not
/// ready.
pub fn environment_status(ctx: &AppContext) -> Vec<EnvironmentStatus> {
    ctx.token_service.environment_status()
}

/// One line per environment, name padded so the states line up.
pub fn format_status(statuses: &[EnvironmentStatus]) -> String {
    let width = statuses.iter().map(|s| s.name.len()).max().unwrap_or(0);

    statuses.iter().fold(String::new(), |mut out, status| {
        let state = if status.ready { "ready" } else { "not configured" };
        let _ = writeln!(out, "{:<width$}  {state}", status.name);
        out
    })
}
