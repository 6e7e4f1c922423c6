//! Install-root layout
//!
//! The config file and the log directory live next to the application:
//!
//! ```text
//! <root>/config.json
//! <root>/logs/http.log
//! ```
//!
//! ## Root resolution
//! 1. `TOKENTRAY_HOME`, when set and non-blank
//! 2. The directory containing the running executable
//! 3. The current working directory, as a last resort

use std::path::{Path, PathBuf};

use tokentray_domain::constants::{CONFIG_FILE_NAME, HOME_ENV_VAR, LOG_DIR_NAME, LOG_FILE_NAME};

/// Fixed file locations under one install root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Paths under an explicit root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the install root from the environment.
    pub fn discover() -> Self {
        if let Some(home) = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.to_string_lossy().trim().is_empty()) {
            tracing::debug!(root = %PathBuf::from(&home).display(), "paths.root_from_env");
            return Self::new(home);
        }

        let root = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        tracing::debug!(root = %root.display(), "paths.root_from_executable");
        Self::new(root)
    }

    /// The install root itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/config.json`
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// `<root>/logs/http.log`
    pub fn log_file(&self) -> PathBuf {
        self.root.join(LOG_DIR_NAME).join(LOG_FILE_NAME)
    }
}
