//! Integration tests for the token acquisition flow
//!
//! Exercises `TokenService` against in-memory ports: every classified error,
//! which of them leave a failure log entry, and what the entry contains.

mod support;

use std::sync::Arc;

use support::ports::{prd_config, RecordingFailureLog, ScriptedTransport, StaticConfigSource};
use tokentray_core::{acquire_token_with, EnvironmentStatus, TokenService};
use tokentray_domain::{EnvironmentConfig, FailureDetail, FailureKind, TokenError};

struct Harness {
    config: Arc<StaticConfigSource>,
    transport: Arc<ScriptedTransport>,
    log: Arc<RecordingFailureLog>,
    service: TokenService,
}

fn harness(config: StaticConfigSource, transport: ScriptedTransport) -> Harness {
    let config = Arc::new(config);
    let transport = Arc::new(transport);
    let log = Arc::new(RecordingFailureLog::default());
    let service = TokenService::new(config.clone(), transport.clone(), log.clone());
    Harness { config, transport, log, service }
}

#[test]
fn returns_access_token_verbatim_without_logging() {
    let h = harness(
        StaticConfigSource::new(prd_config("")),
        ScriptedTransport::responding(200, r#"{"access_token":"abc123","expires_in":3599}"#),
    );

    assert_eq!(h.service.acquire_token("PRD").unwrap(), "abc123");
    assert!(h.log.entries().is_empty());
    assert_eq!(h.transport.sent().len(), 1);
}

#[test]
fn every_call_is_an_independent_exchange() {
    let h = harness(
        StaticConfigSource::new(prd_config("")),
        ScriptedTransport::responding(200, r#"{"access_token":"abc123"}"#),
    );

    h.service.acquire_token("PRD").unwrap();
    h.service.acquire_token("PRD").unwrap();

    assert_eq!(h.transport.sent().len(), 2);
    assert_eq!(h.config.loads(), 2);
}

#[test]
fn configuration_errors_pass_through_untouched() {
    for error in [TokenError::ConfigurationMissing, TokenError::ConfigurationInvalid("eof".into())] {
        let h = harness(
            StaticConfigSource::failing(error.clone()),
            ScriptedTransport::responding(200, "{}"),
        );

        assert_eq!(h.service.acquire_token("PRD").unwrap_err(), error);
        assert!(h.transport.sent().is_empty());
        assert!(h.log.entries().is_empty());
    }
}

#[test]
fn blank_fields_fail_before_any_network_call() {
    let blanks = [
        EnvironmentConfig::new("", "id", "secret"),
        EnvironmentConfig::new("https://x", "  ", "secret"),
        EnvironmentConfig::new("https://x", "id", "\t\n"),
    ];

    for env in blanks {
        let mut config = prd_config("");
        config.environments.insert("SDB".into(), env);
        let h = harness(StaticConfigSource::new(config), ScriptedTransport::responding(200, "{}"));

        assert_eq!(
            h.service.acquire_token("SDB").unwrap_err(),
            TokenError::MissingSettings("SDB".into())
        );
        assert!(h.transport.sent().is_empty());
        assert!(h.log.entries().is_empty());
    }
}

#[test]
fn unknown_environment_is_missing_settings() {
    let h = harness(StaticConfigSource::new(prd_config("")), ScriptedTransport::responding(200, "{}"));

    assert_eq!(h.service.acquire_token("QA").unwrap_err(), TokenError::MissingSettings("QA".into()));
    assert!(h.transport.sent().is_empty());
    assert!(h.log.entries().is_empty());
}

#[test]
fn http_error_logs_status_body_headers_and_command() {
    let h = harness(
        StaticConfigSource::new(prd_config("")),
        ScriptedTransport::responding_with_headers(
            401,
            r#"{"error":"invalid_client"}"#,
            vec![("content-type".into(), "application/json".into())],
        ),
    );

    let err = h.service.acquire_token("PRD").unwrap_err();
    assert_eq!(
        err,
        TokenError::HttpError { status: 401, body: r#"{"error":"invalid_client"}"#.into() }
    );

    let entries = h.log.entries();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.kind(), FailureKind::HttpFailure);
    assert_eq!(entry.environment, "PRD");
    assert_eq!(entry.url, "https://auth.example/token");
    assert_eq!(
        entry.detail,
        FailureDetail::Http {
            status: 401,
            body: r#"{"error":"invalid_client"}"#.into(),
            headers: vec![("content-type".into(), "application/json".into())],
        }
    );

    let rendered = entry.render();
    assert!(rendered.contains("Status: 401"));
    assert!(rendered.contains(r#"{"error":"invalid_client"}"#));
    assert!(rendered.contains("--data-urlencode 'client_secret=secret-1'"));
}

#[test]
fn server_error_with_empty_body_renders_placeholder() {
    let h = harness(StaticConfigSource::new(prd_config("")), ScriptedTransport::responding(503, ""));

    assert_eq!(
        h.service.acquire_token("PRD").unwrap_err(),
        TokenError::HttpError { status: 503, body: String::new() }
    );
    assert!(h.log.entries()[0].render().contains("Response Body:\n<empty>\n"));
}

#[test]
fn transport_failure_is_logged_as_exception() {
    let h = harness(
        StaticConfigSource::new(prd_config("/etc/ssl/corp.pem")),
        ScriptedTransport::failing("operation timed out"),
    );

    assert_eq!(
        h.service.acquire_token("PRD").unwrap_err(),
        TokenError::RequestFailed("operation timed out".into())
    );

    let entries = h.log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].detail, FailureDetail::Exception { error: "operation timed out".into() });
    let command = entries[0].request_equivalent.as_deref().unwrap();
    assert!(command.contains("--cacert '/etc/ssl/corp.pem'"));
}

#[test]
fn request_equivalent_omits_ca_bundle_without_cert_path() {
    let h = harness(StaticConfigSource::new(prd_config("")), ScriptedTransport::failing("refused"));

    h.service.acquire_token("PRD").unwrap_err();
    let command = h.log.entries()[0].request_equivalent.clone().unwrap();
    assert!(!command.contains("--cacert"));
}

#[test]
fn non_json_body_is_invalid_response() {
    let h = harness(
        StaticConfigSource::new(prd_config("")),
        ScriptedTransport::responding(200, "<html>maintenance</html>"),
    );

    let err = h.service.acquire_token("PRD").unwrap_err();
    assert!(matches!(err, TokenError::InvalidResponse(_)));

    let entries = h.log.entries();
    assert_eq!(entries.len(), 1);
    match &entries[0].detail {
        FailureDetail::Exception { error } => assert!(error.starts_with("Invalid JSON response: ")),
        other => panic!("expected exception entry, got {other:?}"),
    }
}

#[test]
fn json_without_usable_token_is_missing_token() {
    let bodies = [r#"{"token_type":"Bearer"}"#, r#"{"access_token":""}"#, r#"{"access_token":null}"#, "[]"];

    for body in bodies {
        let h = harness(StaticConfigSource::new(prd_config("")), ScriptedTransport::responding(200, body));

        assert_eq!(h.service.acquire_token("PRD").unwrap_err(), TokenError::MissingToken, "{body}");
        let entries = h.log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].detail,
            FailureDetail::Exception { error: "No access_token in response.".into() }
        );
    }
}

#[test]
fn sends_trimmed_credentials() {
    let mut config = prd_config(" /ca.pem ");
    config.environments.insert(
        "STG".into(),
        EnvironmentConfig::new(" https://stg.example/token ", " stg-id ", " stg-secret "),
    );
    let h = harness(StaticConfigSource::new(config), ScriptedTransport::responding(200, r#"{"access_token":"t"}"#));

    h.service.acquire_token("STG").unwrap();
    let sent = h.transport.sent();
    assert_eq!(sent[0].url, "https://stg.example/token");
    assert_eq!(sent[0].client_id, "stg-id");
    assert_eq!(sent[0].client_secret, "stg-secret");
    assert_eq!(sent[0].cert_path.as_deref(), Some("/ca.pem"));
}

#[test]
fn pure_variant_works_on_explicit_config() {
    let transport = ScriptedTransport::responding(200, r#"{"access_token":"xyz"}"#);
    let log = RecordingFailureLog::default();

    let token = acquire_token_with(&prd_config(""), "PRD", &transport, &log).unwrap();
    assert_eq!(token, "xyz");
}

#[test]
fn readiness_follows_trimming_rule() {
    let mut config = prd_config("");
    config.environments.insert("SDB".into(), EnvironmentConfig::new("https://x", "id", "   "));
    let h = harness(StaticConfigSource::new(config), ScriptedTransport::responding(200, "{}"));

    assert!(h.service.is_environment_ready("PRD"));
    assert!(!h.service.is_environment_ready("SDB"));
    assert!(!h.service.is_environment_ready("QA"));
    assert_eq!(
        h.service.environment_status(),
        vec![
            EnvironmentStatus { name: "PRD".into(), ready: true },
            EnvironmentStatus { name: "SDB".into(), ready: false },
            EnvironmentStatus { name: "STG".into(), ready: false },
        ]
    );
}

#[test]
fn readiness_is_false_when_config_cannot_load() {
    let h = harness(
        StaticConfigSource::failing(TokenError::ConfigurationInvalid("bad".into())),
        ScriptedTransport::responding(200, "{}"),
    );

    assert!(!h.service.is_environment_ready("PRD"));
    assert!(h.service.environment_status().iter().all(|status| !status.ready));
}
