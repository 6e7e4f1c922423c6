//! In-memory port implementations for testing

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokentray_core::{
    ConfigSource, FailureLog, TokenRequest, TokenTransport, TransportError, TransportResponse,
};
use tokentray_domain::{AppConfig, EnvironmentConfig, FailureEntry, Result, TokenError};

/// Config source returning a fixed outcome on every load.
pub struct StaticConfigSource {
    outcome: Result<AppConfig>,
    loads: AtomicUsize,
}

impl StaticConfigSource {
    pub fn new(config: AppConfig) -> Self {
        Self { outcome: Ok(config), loads: AtomicUsize::new(0) }
    }

    pub fn failing(error: TokenError) -> Self {
        Self { outcome: Err(error), loads: AtomicUsize::new(0) }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self) -> Result<AppConfig> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Failure log that keeps entries in memory, newest first.
#[derive(Default)]
pub struct RecordingFailureLog {
    entries: Mutex<Vec<FailureEntry>>,
}

impl RecordingFailureLog {
    pub fn entries(&self) -> Vec<FailureEntry> {
        self.entries.lock().clone()
    }
}

impl FailureLog for RecordingFailureLog {
    fn record(&self, entry: FailureEntry) {
        self.entries.lock().insert(0, entry);
    }
}

/// Transport that replays one canned outcome and remembers what it was sent.
pub struct ScriptedTransport {
    outcome: std::result::Result<TransportResponse, TransportError>,
    sent: Mutex<Vec<TokenRequest>>,
}

impl ScriptedTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self::responding_with_headers(status, body, Vec::new())
    }

    pub fn responding_with_headers(status: u16, body: &str, headers: Vec<(String, String)>) -> Self {
        Self {
            outcome: Ok(TransportResponse { status, headers, body: body.to_string() }),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self { outcome: Err(TransportError(message.to_string())), sent: Mutex::new(Vec::new()) }
    }

    pub fn sent(&self) -> Vec<TokenRequest> {
        self.sent.lock().clone()
    }
}

impl TokenTransport for ScriptedTransport {
    fn send(&self, request: &TokenRequest) -> std::result::Result<TransportResponse, TransportError> {
        self.sent.lock().push(request.clone());
        self.outcome.clone()
    }
}

/// Config with a ready `PRD` pointing at `https://auth.example/token`.
pub fn prd_config(cert_path: &str) -> AppConfig {
    AppConfig {
        cert_path: cert_path.to_string(),
        auto_start: false,
        environments: BTreeMap::from([(
            "PRD".to_string(),
            EnvironmentConfig::new("https://auth.example/token", "client-1", "secret-1"),
        )]),
    }
}
