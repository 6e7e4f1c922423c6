//! Token request construction
//!
//! Builds the form POST for one environment and its curl-style equivalent,
//! which is attached to failure log entries so a request can be replayed by
//! hand.

use std::fmt;

use tokentray_domain::constants::{FORM_CONTENT_TYPE, GRANT_TYPE_CLIENT_CREDENTIALS};
use tokentray_domain::{AppConfig, Result, TokenError};

/// Trimmed, validated inputs for one client-credentials exchange
#[derive(Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub environment: String,
    pub url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Custom CA bundle; `None` means the platform trust anchors.
    pub cert_path: Option<String>,
}

impl TokenRequest {
    /// Resolve and validate the request for `environment`.
    ///
    /// # Errors
    /// Returns `MissingSettings` when the environment is unknown or any of
    /// `url`, `client_id`, `client_secret` is blank after trimming.
    pub fn from_config(config: &AppConfig, environment: &str) -> Result<Self> {
        let env = config.environment(environment).trimmed();
        if !env.is_ready() {
            return Err(TokenError::MissingSettings(environment.to_string()));
        }

        Ok(Self {
            environment: environment.to_string(),
            url: env.url,
            client_id: env.client_id,
            client_secret: env.client_secret,
            cert_path: config.cert_path().map(str::to_string),
        })
    }

    /// Form body parameters, in wire order.
    #[must_use]
    pub fn form_params(&self) -> [(&'static str, &str); 3] {
        [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", GRANT_TYPE_CLIENT_CREDENTIALS),
        ]
    }

    /// Shell command reproducing exactly this request.
    ///
    /// Contains the client secret, as the request itself does.
    #[must_use]
    pub fn request_equivalent(&self) -> String {
        let mut parts = vec![
            "curl --location".to_string(),
            shell_quote(&self.url),
            format!("--header {}", shell_quote(&format!("Content-Type: {FORM_CONTENT_TYPE}"))),
        ];
        parts.extend(
            self.form_params()
                .iter()
                .map(|(key, value)| format!("--data-urlencode {}", shell_quote(&format!("{key}={value}")))),
        );
        if let Some(cert_path) = &self.cert_path {
            parts.push(format!("--cacert {}", shell_quote(cert_path)));
        }
        parts.join(" ")
    }
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("environment", &self.environment)
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("cert_path", &self.cert_path)
            .finish()
    }
}

/// Single-quote for POSIX shells; embedded quotes become `'\''`.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
