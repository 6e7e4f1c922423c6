//! OAuth2 client-credentials token acquisition

pub mod ports;
pub mod request;
pub mod service;
