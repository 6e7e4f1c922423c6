//! Application context - dependency injection container

use std::sync::Arc;

use tokentray_core::{TokenService, TokenTransport};
use tokentray_infra::{AppPaths, FileFailureLog, HttpTokenTransport, JsonConfigStore};

/// Application context - holds all services and dependencies
///
/// Construction touches neither the file system nor the network; the config
/// file is read lazily on every command.
pub struct AppContext {
    pub paths: AppPaths,
    pub config_store: Arc<JsonConfigStore>,
    pub failure_log: Arc<FileFailureLog>,
    pub token_service: Arc<TokenService>,
}

impl AppContext {
    /// Context rooted at the discovered install root.
    pub fn new() -> Self {
        Self::with_paths(AppPaths::discover())
    }

    /// Context rooted at `paths`, talking HTTPS to the real endpoints.
    pub fn with_paths(paths: AppPaths) -> Self {
        Self::with_transport(paths, Arc::new(HttpTokenTransport::new()))
    }

    /// Context with an explicit transport, for tests and embedding.
    pub fn with_transport(paths: AppPaths, transport: Arc<dyn TokenTransport>) -> Self {
        let config_store = Arc::new(JsonConfigStore::new(paths.config_file()));
        let failure_log = Arc::new(FileFailureLog::new(paths.log_file()));

        let token_service =
            Arc::new(TokenService::new(config_store.clone(), transport, failure_log.clone()));

        tracing::debug!(root = %paths.root().display(), "context.initialized");

        Self { paths, config_store, failure_log, token_service }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
