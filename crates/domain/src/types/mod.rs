//! Domain types and models

pub mod failure;

pub use failure::{FailureDetail, FailureEntry, FailureKind};
