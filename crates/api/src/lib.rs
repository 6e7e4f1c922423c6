//! # Tokentray App
//!
//! Command layer and main entry point.
//!
//! This crate contains:
//! - Commands (token, identifier, status, settings, log file)
//! - Application context (dependency injection)
//! - The `tokentray` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Keeps every command free of terminal I/O so the binary only prints

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
