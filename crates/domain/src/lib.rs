//! # Tokentray Domain
//!
//! Data contracts for the token tray.
//!
//! This crate contains:
//! - Environment and global configuration records
//! - The classified `TokenError` taxonomy and `Result` alias
//! - Failure log entries and their text layout
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Tokentray crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
