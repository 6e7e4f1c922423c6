//! Configuration loading and persistence
//!
//! This module provides the JSON config file store read by the token flow
//! and written by the settings commands.

pub mod loader;

// Re-export commonly used items
pub use loader::{parse_config, JsonConfigStore, StoreError};
