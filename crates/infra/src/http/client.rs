use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Certificate;
use tokentray_core::{TokenRequest, TokenTransport, TransportError, TransportResponse};
use tokentray_domain::constants::{FORM_CONTENT_TYPE, REQUEST_TIMEOUT_SECS};
use tracing::debug;

use crate::errors::describe_http_error;

/// Blocking HTTPS transport for the client-credentials exchange.
///
/// A fresh client is built for every request so that a changed CA bundle
/// path takes effect on the next click without restarting anything.
#[derive(Debug, Clone)]
pub struct HttpTokenTransport {
    timeout: Duration,
    user_agent: Option<String>,
    use_proxy: bool,
}

impl HttpTokenTransport {
    /// Start building a new transport.
    pub fn builder() -> HttpTokenTransportBuilder {
        HttpTokenTransportBuilder::default()
    }

    /// Transport with the default 15 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn client_for(&self, cert_path: Option<&str>) -> Result<Client, TransportError> {
        let mut builder = Client::builder().use_rustls_tls().timeout(self.timeout);

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        if !self.use_proxy {
            builder = builder.no_proxy();
        }

        if let Some(path) = cert_path {
            let certificates = load_ca_bundle(Path::new(path))?;
            debug!(cert_path = path, count = certificates.len(), "http.ca_bundle.loaded");

            // The bundle replaces the platform roots; verification stays on.
            builder = builder.tls_built_in_root_certs(false);
            for certificate in certificates {
                builder = builder.add_root_certificate(certificate);
            }
        }

        builder.build().map_err(|err| TransportError(describe_http_error(&err)))
    }
}

impl Default for HttpTokenTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenTransport for HttpTokenTransport {
    fn send(&self, request: &TokenRequest) -> Result<TransportResponse, TransportError> {
        let client = self.client_for(request.cert_path.as_deref())?;

        debug!(url = %request.url, "http.token_request.sending");

        let response = client
            .post(&request.url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .form(&request.form_params())
            .send()
            .map_err(|err| TransportError(describe_http_error(&err)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.as_str().to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
            })
            .collect();
        let body = response.text().map_err(|err| TransportError(describe_http_error(&err)))?;

        debug!(url = %request.url, status, "http.token_request.received");

        Ok(TransportResponse { status, headers, body })
    }
}

/// Read every certificate from a PEM bundle.
fn load_ca_bundle(path: &Path) -> Result<Vec<Certificate>, TransportError> {
    let bytes = std::fs::read(path).map_err(|e| {
        TransportError(format!("Failed to read CA certificate {}: {e}", path.display()))
    })?;

    let certificates = Certificate::from_pem_bundle(&bytes)
        .map_err(|e| TransportError(format!("Invalid CA certificate {}: {e}", path.display())))?;

    if certificates.is_empty() {
        return Err(TransportError(format!(
            "Invalid CA certificate {}: no certificates found",
            path.display()
        )));
    }

    Ok(certificates)
}

/// Builder for [`HttpTokenTransport`].
#[derive(Debug)]
pub struct HttpTokenTransportBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    use_proxy: bool,
}

impl Default for HttpTokenTransportBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: Some(concat!("tokentray/", env!("CARGO_PKG_VERSION")).to_string()),
            use_proxy: true,
        }
    }
}

impl HttpTokenTransportBuilder {
    /// Per-request timeout, connect included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` header sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Ignore `HTTP(S)_PROXY` from the environment.
    pub fn no_proxy(mut self) -> Self {
        self.use_proxy = false;
        self
    }

    /// Finish the transport.
    pub fn build(self) -> HttpTokenTransport {
        HttpTokenTransport {
            timeout: self.timeout,
            user_agent: self.user_agent,
            use_proxy: self.use_proxy,
        }
    }
}
