//! Configuration loader
//!
//! Reads and writes the global configuration as a JSON object at a fixed
//! path under the install root.
//!
//! ## Loading Strategy
//! 1. A missing file is `ConfigurationMissing` (the user never saved settings)
//! 2. An unreadable or unparseable file is `ConfigurationInvalid`
//! 3. The file is read again on every call; nothing is cached
//!
//! ## Saving
//! Values are trimmed, the default environments are always present, and the
//! output is pretty-printed with two-space indentation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokentray_core::ConfigSource;
use tokentray_domain::{AppConfig, Result, TokenError};

use crate::errors::InfraError;

/// Failure to persist the configuration
#[derive(Debug, Error)]
pub enum StoreError {
    /// Directory or file could not be written.
    #[error("Failed to write config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration could not be rendered as JSON.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Config store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Store at `path`; the file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the settings were ever saved.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the configuration, or an empty one when no file exists yet.
    ///
    /// Used by the settings commands, which start from whatever is on disk.
    ///
    /// # Errors
    /// Returns `ConfigurationInvalid` if an existing file cannot be parsed.
    pub fn load_or_default(&self) -> Result<AppConfig> {
        match self.load() {
            Err(TokenError::ConfigurationMissing) => Ok(AppConfig::default()),
            other => other,
        }
    }

    /// Persist `config`, trimmed and with every default environment present.
    ///
    /// # Errors
    /// Returns `StoreError` if the directory or file cannot be written.
    pub fn save(&self, config: &AppConfig) -> std::result::Result<(), StoreError> {
        let normalized = config.trimmed().with_default_environments();
        let contents = serde_json::to_string_pretty(&normalized)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }
        fs::write(&self.path, contents)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })?;

        tracing::info!(path = %self.path.display(), "config.saved");
        Ok(())
    }
}

impl ConfigSource for JsonConfigStore {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "config.missing");
            return Err(TokenError::ConfigurationMissing);
        }

        tracing::debug!(path = %self.path.display(), "config.loading");

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            TokenError::ConfigurationInvalid(format!("Failed to read config file: {e}"))
        })?;

        parse_config(&contents)
    }
}

/// Parse configuration from string content
///
/// # Errors
/// Returns `ConfigurationInvalid` if the content is not a JSON object of the
/// expected shape.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    serde_json::from_str(contents).map_err(|e| InfraError::from(e).into())
}
