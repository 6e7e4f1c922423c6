//! Token command: fetch a fresh access token for one environment

use tokentray_domain::Result as DomainResult;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Fetch a fresh access token for `environment`.
///
/// Blocks for the duration of the HTTP exchange. Failures after the request
/// was built have already been written to the failure log when this returns.
pub fn get_token(ctx: &AppContext, environment: &str) -> DomainResult<String> {
    execute_logged("token::get_token", || ctx.token_service.acquire_token(environment))
}
