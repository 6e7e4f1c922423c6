//! Settings commands: inspect and edit the config file
//!
//! Every write loads the current file (or an empty configuration when none
//! exists), changes one value and saves the whole document back, trimmed and
//! with the default environments present.

use anyhow::{anyhow, bail, Context};
use tokentray_domain::{AppConfig, EnvironmentField};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_storage_logged;

/// Shown in place of a non-empty client secret.
pub const SECRET_MASK: &str = "********";

/// Top-level keys that are settings rather than environment names.
const RESERVED_KEYS: [&str; 2] = ["cert_path", "auto_start"];

/// Current configuration as pretty JSON, client secrets masked.
///
/// # Errors
/// Returns an error if an existing config file cannot be parsed.
pub fn show_config(ctx: &AppContext) -> anyhow::Result<String> {
    execute_storage_logged("settings::show_config", || {
        let config = ctx.config_store.load_or_default()?.with_default_environments();
        let json = serde_json::to_string_pretty(&masked(config))
            .context("Failed to serialize config")?;
        Ok(json)
    })
}

/// Set one field of one environment, creating the environment if needed.
///
/// # Errors
/// Returns an error for an unknown field or a reserved or blank environment
/// name, or if the config file cannot be read or written.
pub fn set_environment_field(
    ctx: &AppContext,
    environment: &str,
    field: &str,
    value: &str,
) -> anyhow::Result<()> {
    execute_storage_logged("settings::set_environment_field", || {
        let environment = validate_environment_name(environment)?;
        let field: EnvironmentField = field.parse().map_err(|e: String| anyhow!(e))?;

        let mut config = ctx.config_store.load_or_default()?;
        config.environments.entry(environment.to_string()).or_default().set_field(field, value);

        ctx.config_store.save(&config).context("Failed to save settings")?;
        tracing::info!(environment, %field, "settings.field_updated");
        Ok(())
    })
}

/// Set the custom CA bundle path; an empty path restores the platform roots.
///
/// # Errors
/// Returns an error if the config file cannot be read or written.
pub fn set_cert_path(ctx: &AppContext, cert_path: &str) -> anyhow::Result<()> {
    execute_storage_logged("settings::set_cert_path", || {
        let mut config = ctx.config_store.load_or_default()?;
        config.cert_path = cert_path.to_string();

        ctx.config_store.save(&config).context("Failed to save settings")?;
        tracing::info!(custom_ca = config.cert_path().is_some(), "settings.cert_path_updated");
        Ok(())
    })
}

fn validate_environment_name(name: &str) -> anyhow::Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Environment name must not be empty");
    }
    if RESERVED_KEYS.contains(&name) {
        bail!("'{name}' is a reserved setting, not an environment name");
    }
    Ok(name)
}

fn masked(mut config: AppConfig) -> AppConfig {
    for env in config.environments.values_mut() {
        if !env.client_secret.is_empty() {
            env.client_secret = SECRET_MASK.to_string();
        }
    }
    config
}
