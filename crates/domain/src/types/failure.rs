//! Failure log entries
//!
//! One entry is produced for every failed token exchange that got as far as
//! building a request. Entries render to a fixed multi-line block:
//!
//! ```text
//! [2026-01-31 09:15:02] HTTP failure
//! Environment: PRD
//! URL: https://auth.example/token
//! Status: 401
//! Request Curl:
//! curl --location 'https://auth.example/token' ...
//! Response Headers:
//! content-type: application/json
//! Response Body:
//! {"error":"invalid_client"}
//! ------------------------------------------------------------
//!
//! ```

use std::fmt;

use chrono::{Local, NaiveDateTime};

use crate::constants::{
    EMPTY_BODY_PLACEHOLDER, LOG_SEPARATOR_WIDTH, LOG_TIMESTAMP_FORMAT, REQUEST_EQUIVALENT_HEADING,
};

/// Which header line a block starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HttpFailure,
    RequestException,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpFailure => f.write_str("HTTP failure"),
            Self::RequestException => f.write_str("Request exception"),
        }
    }
}

/// Kind-specific part of an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureDetail {
    /// The server answered with status >= 400.
    Http { status: u16, body: String, headers: Vec<(String, String)> },
    /// Transport failure or an unusable response body.
    Exception { error: String },
}

/// Immutable record of one failed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureEntry {
    pub timestamp: NaiveDateTime,
    pub environment: String,
    pub url: String,
    pub detail: FailureDetail,
    pub request_equivalent: Option<String>,
}

impl FailureEntry {
    /// HTTP failure stamped with the current local time.
    pub fn http(
        environment: impl Into<String>,
        url: impl Into<String>,
        status: u16,
        body: impl Into<String>,
        headers: Vec<(String, String)>,
        request_equivalent: Option<String>,
    ) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            environment: environment.into(),
            url: url.into(),
            detail: FailureDetail::Http { status, body: body.into(), headers },
            request_equivalent,
        }
    }

    /// Request exception stamped with the current local time.
    pub fn exception(
        environment: impl Into<String>,
        url: impl Into<String>,
        error: impl Into<String>,
        request_equivalent: Option<String>,
    ) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            environment: environment.into(),
            url: url.into(),
            detail: FailureDetail::Exception { error: error.into() },
            request_equivalent,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self.detail {
            FailureDetail::Http { .. } => FailureKind::HttpFailure,
            FailureDetail::Exception { .. } => FailureKind::RequestException,
        }
    }

    /// Render the block exactly as it is written to the log file, including
    /// the separator line and the trailing blank line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("[{}] {}", self.timestamp.format(LOG_TIMESTAMP_FORMAT), self.kind()),
            format!("Environment: {}", self.environment),
            format!("URL: {}", self.url),
        ];

        match &self.detail {
            FailureDetail::Http { status, .. } => lines.push(format!("Status: {status}")),
            FailureDetail::Exception { error } => lines.push(format!("Error: {error}")),
        }

        if let Some(command) = self.request_equivalent.as_deref().filter(|c| !c.is_empty()) {
            lines.push(REQUEST_EQUIVALENT_HEADING.to_string());
            lines.push(command.to_string());
        }

        if let FailureDetail::Http { body, headers, .. } = &self.detail {
            if !headers.is_empty() {
                lines.push("Response Headers:".to_string());
                lines.extend(headers.iter().map(|(key, value)| format!("{key}: {value}")));
            }
            lines.push("Response Body:".to_string());
            lines.push(if body.is_empty() { EMPTY_BODY_PLACEHOLDER.to_string() } else { body.clone() });
        }

        lines.push("-".repeat(LOG_SEPARATOR_WIDTH));

        let mut block = lines.join("\n");
        block.push_str("\n\n");
        block
    }
}
