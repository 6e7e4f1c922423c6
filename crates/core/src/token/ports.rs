//! Port interfaces for token acquisition
//!
//! These traits define the boundaries between the acquisition flow and the
//! infrastructure that loads configuration, talks HTTP and writes the
//! failure log. All of them are synchronous: the flow blocks its caller.

use thiserror::Error;
use tokentray_domain::{AppConfig, FailureEntry, Result};

use super::request::TokenRequest;

/// Source of the global configuration, read fresh on every call
pub trait ConfigSource: Send + Sync {
    /// Load the current configuration.
    ///
    /// Implementations return `ConfigurationMissing` when the store does not
    /// exist and `ConfigurationInvalid` when it cannot be parsed.
    fn load(&self) -> Result<AppConfig>;
}

/// Append-only record of failed exchanges
///
/// Writes are fire-and-forget: an implementation that cannot write must
/// swallow the problem so the caller still sees the original failure.
pub trait FailureLog: Send + Sync {
    /// Persist one entry, newest first.
    fn record(&self, entry: FailureEntry);

    /// Record a response with status >= 400.
    fn record_http_failure(
        &self,
        environment: &str,
        url: &str,
        status: u16,
        body: &str,
        headers: &[(String, String)],
        request_equivalent: Option<&str>,
    ) {
        self.record(FailureEntry::http(
            environment,
            url,
            status,
            body,
            headers.to_vec(),
            request_equivalent.map(str::to_string),
        ));
    }

    /// Record a transport failure or an unusable response.
    fn record_exception(
        &self,
        environment: &str,
        url: &str,
        error_description: &str,
        request_equivalent: Option<&str>,
    ) {
        self.record(FailureEntry::exception(
            environment,
            url,
            error_description,
            request_equivalent.map(str::to_string),
        ));
    }
}

/// Raw response from the token endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in the order the server sent them.
    pub headers: Vec<(String, String)>,
    /// Response body as text.
    pub body: String,
}

/// Transport-level failure (timeout, DNS, refused connection, TLS, CA bundle)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Performs the single form POST of a token request
pub trait TokenTransport: Send + Sync {
    /// Send `request` and return whatever the server answered, whatever the
    /// status. Only failures to obtain a response are errors.
    fn send(&self, request: &TokenRequest) -> std::result::Result<TransportResponse, TransportError>;
}
