//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified failure of a token acquisition.
///
/// Every variant is terminal: nothing retries internally. The display text is
/// what the tray shows in its notification, so it must never carry more than
/// what was already sent over the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TokenError {
    #[error("Config file not found. Save settings first.")]
    ConfigurationMissing,

    #[error("Config file is invalid JSON: {0}")]
    ConfigurationInvalid(String),

    #[error("Missing settings for {0}.")]
    MissingSettings(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Invalid JSON response: {0}")]
    InvalidResponse(String),

    #[error("No access_token in response.")]
    MissingToken,
}

impl TokenError {
    /// Whether this failure leaves a block in the failure log.
    ///
    /// Configuration problems are rejected before any request is built, so
    /// only the network-side kinds are recorded.
    #[must_use]
    pub fn is_logged(&self) -> bool {
        matches!(
            self,
            Self::RequestFailed(_)
                | Self::HttpError { .. }
                | Self::InvalidResponse(_)
                | Self::MissingToken
        )
    }

    /// Stable label suitable for structured logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing => "configuration_missing",
            Self::ConfigurationInvalid(_) => "configuration_invalid",
            Self::MissingSettings(_) => "missing_settings",
            Self::RequestFailed(_) => "request_failed",
            Self::HttpError { .. } => "http_error",
            Self::InvalidResponse(_) => "invalid_response",
            Self::MissingToken => "missing_token",
        }
    }
}

/// Result type alias for token operations
pub type Result<T> = std::result::Result<T, TokenError>;
