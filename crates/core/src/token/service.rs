//! Token acquisition service - core business logic

use std::sync::Arc;

use serde_json::Value;
use tokentray_domain::constants::ACCESS_TOKEN_FIELD;
use tokentray_domain::{AppConfig, Result, TokenError};
use tracing::{debug, info, warn};

use super::ports::{ConfigSource, FailureLog, TokenTransport};
use super::request::TokenRequest;

/// Readiness of one environment, as shown by the tray menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentStatus {
    pub name: String,
    pub ready: bool,
}

/// Token acquisition service
///
/// Holds no state between calls: configuration is loaded again for every
/// request and nothing is cached.
pub struct TokenService {
    config: Arc<dyn ConfigSource>,
    transport: Arc<dyn TokenTransport>,
    failure_log: Arc<dyn FailureLog>,
}

impl TokenService {
    /// Create a new token service
    pub fn new(
        config: Arc<dyn ConfigSource>,
        transport: Arc<dyn TokenTransport>,
        failure_log: Arc<dyn FailureLog>,
    ) -> Self {
        Self { config, transport, failure_log }
    }

    /// Fetch a fresh access token for `environment`.
    ///
    /// Blocks for up to the transport timeout; run it off any UI thread.
    ///
    /// # Errors
    /// Any [`TokenError`]; network-side failures have already been written
    /// to the failure log when this returns.
    pub fn acquire_token(&self, environment: &str) -> Result<String> {
        let config = self.config.load()?;
        acquire_token_with(&config, environment, self.transport.as_ref(), self.failure_log.as_ref())
    }

    /// Whether `environment` has complete settings.
    ///
    /// A missing or unreadable config file simply means "not ready".
    pub fn is_environment_ready(&self, environment: &str) -> bool {
        match self.config.load() {
            Ok(config) => config.is_environment_ready(environment),
            Err(err) => {
                debug!(environment, error = %err, "token.readiness.config_unavailable");
                false
            }
        }
    }

    /// Readiness of the default environments plus any extra ones on file.
    pub fn environment_status(&self) -> Vec<EnvironmentStatus> {
        let config = self.config.load().unwrap_or_else(|err| {
            debug!(error = %err, "token.readiness.config_unavailable");
            AppConfig::default()
        });

        config
            .environment_names()
            .into_iter()
            .map(|name| {
                let ready = config.is_environment_ready(&name);
                EnvironmentStatus { name, ready }
            })
            .collect()
    }
}

/// Run one acquisition against an already loaded configuration.
///
/// # Errors
/// See [`TokenService::acquire_token`].
pub fn acquire_token_with(
    config: &AppConfig,
    environment: &str,
    transport: &dyn TokenTransport,
    failure_log: &dyn FailureLog,
) -> Result<String> {
    let request = TokenRequest::from_config(config, environment)?;
    let command = request.request_equivalent();

    info!(
        environment,
        url = %request.url,
        custom_ca = request.cert_path.is_some(),
        "token.acquire.started"
    );

    let response = match transport.send(&request) {
        Ok(response) => response,
        Err(err) => {
            warn!(environment, error = %err, "token.acquire.request_failed");
            failure_log.record_exception(environment, &request.url, &err.0, Some(&command));
            return Err(TokenError::RequestFailed(err.0));
        }
    };

    debug!(environment, status = response.status, "token.acquire.response");

    if response.status >= 400 {
        warn!(environment, status = response.status, "token.acquire.http_error");
        failure_log.record_http_failure(
            environment,
            &request.url,
            response.status,
            &response.body,
            &response.headers,
            Some(&command),
        );
        return Err(TokenError::HttpError { status: response.status, body: response.body });
    }

    let payload: Value = match serde_json::from_str(&response.body) {
        Ok(payload) => payload,
        Err(err) => {
            let detail = err.to_string();
            warn!(environment, error = %detail, "token.acquire.invalid_json");
            failure_log.record_exception(
                environment,
                &request.url,
                &format!("Invalid JSON response: {detail}"),
                Some(&command),
            );
            return Err(TokenError::InvalidResponse(detail));
        }
    };

    match payload.get(ACCESS_TOKEN_FIELD).and_then(Value::as_str).filter(|token| !token.is_empty()) {
        Some(token) => {
            info!(environment, "token.acquire.succeeded");
            Ok(token.to_string())
        }
        None => {
            warn!(environment, "token.acquire.missing_token");
            failure_log.record_exception(
                environment,
                &request.url,
                &TokenError::MissingToken.to_string(),
                Some(&command),
            );
            Err(TokenError::MissingToken)
        }
    }
}
