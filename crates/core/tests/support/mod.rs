//! Shared test helpers for `tokentray-core` integration tests.
//!
//! In-memory implementations of the token ports so acquisition tests can
//! focus on behaviour instead of I/O.

#![allow(dead_code)]

pub mod ports;
