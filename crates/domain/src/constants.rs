//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Token request
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const ACCESS_TOKEN_FIELD: &str = "access_token";

// Environments offered by the tray menu, in menu order
pub const DEFAULT_ENVIRONMENTS: [&str; 3] = ["PRD", "SDB", "STG"];

// Install-root layout
pub const HOME_ENV_VAR: &str = "TOKENTRAY_HOME";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_DIR_NAME: &str = "logs";
pub const LOG_FILE_NAME: &str = "http.log";

// Failure log layout
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const LOG_SEPARATOR_WIDTH: usize = 60;
pub const EMPTY_BODY_PLACEHOLDER: &str = "<empty>";
pub const REQUEST_EQUIVALENT_HEADING: &str = "Request Curl:";
