//! HTTP transport for the token endpoint

pub mod client;

pub use client::{HttpTokenTransport, HttpTokenTransportBuilder};
