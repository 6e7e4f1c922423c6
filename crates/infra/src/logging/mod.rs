//! File-backed failure log

pub mod failure_log;

pub use failure_log::FileFailureLog;
