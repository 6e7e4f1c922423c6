//! # Tokentray Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The token acquisition flow and its validation rules
//! - Port interfaces (traits) for configuration, transport and failure log
//! - Identifier generation
//!
//! ## Architecture Principles
//! - Only depends on `tokentray-domain`
//! - No file, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod identifier;
pub mod token;

pub use identifier::generate_identifier;
pub use token::ports::{ConfigSource, FailureLog, TokenTransport, TransportError, TransportResponse};
pub use token::request::TokenRequest;
pub use token::service::{acquire_token_with, EnvironmentStatus, TokenService};
