//! # Tokentray Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - JSON config file store
//! - Blocking HTTPS transport for the token endpoint
//! - File-backed failure log
//! - Install-root path resolution and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `tokentray-core`
//! - Depends on `tokentray-domain` and `tokentray-core`
//! - Contains all "impure" code (file system, network)

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod observability;
pub mod paths;

// Re-export commonly used items
pub use config::{JsonConfigStore, StoreError};
pub use errors::InfraError;
pub use http::{HttpTokenTransport, HttpTokenTransportBuilder};
pub use logging::FileFailureLog;
pub use paths::AppPaths;
