//! Conversions from external infrastructure errors into domain errors.

use std::error::Error as StdError;

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use tokentray_domain::TokenError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TokenError);

impl From<InfraError> for TokenError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TokenError> for InfraError {
    fn from(value: TokenError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → TokenError */
/* -------------------------------------------------------------------------- */

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(TokenError::ConfigurationInvalid(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → transport failure text */
/* -------------------------------------------------------------------------- */

/// Human-readable description of a transport failure.
///
/// reqwest's own message stops at "error sending request"; the underlying
/// cause (DNS, refused connection, certificate problem) lives in the source
/// chain, so it is appended here.
pub fn describe_http_error(err: &HttpError) -> String {
    let chain = error_chain(err);

    if err.is_timeout() {
        return format!("request timed out: {chain}");
    }

    if err.is_connect() {
        return format!("connection failed: {chain}");
    }

    chain
}

fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
