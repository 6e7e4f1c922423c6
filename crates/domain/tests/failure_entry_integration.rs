//! Integration tests for failure log entries and error classification
//!
//! Scenario-level checks that pair a classified `TokenError` with the log
//! block the token flow writes for it.

use chrono::NaiveDate;
use tokentray_domain::{FailureDetail, FailureEntry, FailureKind, TokenError};

fn at(hour: u32, minute: u32, second: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap().and_hms_opt(hour, minute, second).unwrap()
}

/// Scenario: the token endpoint rejects the client credentials.
#[test]
fn test_rejected_credentials_block() {
    let error = TokenError::HttpError { status: 401, body: r#"{"error":"invalid_client"}"#.into() };
    assert!(error.is_logged());

    let entry = FailureEntry::http(
        "PRD",
        "https://auth.example/token",
        401,
        r#"{"error":"invalid_client"}"#,
        Vec::new(),
        None,
    )
    .with_timestamp(at(8, 0, 0));

    assert_eq!(entry.kind(), FailureKind::HttpFailure);
    assert_eq!(
        entry.render(),
        format!(
            "[2026-03-14 08:00:00] HTTP failure\n\
             Environment: PRD\n\
             URL: https://auth.example/token\n\
             Status: 401\n\
             Response Body:\n\
             {{\"error\":\"invalid_client\"}}\n\
             {}\n\n",
            "-".repeat(60)
        )
    );
}

/// Scenario: two failures in a row; the file keeps the newest block on top.
#[test]
fn test_blocks_concatenate_newest_first() {
    let older = FailureEntry::exception("SDB", "https://sdb", "connection failed: refused", None)
        .with_timestamp(at(9, 0, 0));
    let newer = FailureEntry::exception("SDB", "https://sdb", "No access_token in response.", None)
        .with_timestamp(at(9, 5, 0));

    let file = format!("{}{}", newer.render(), older.render());

    assert!(file.starts_with("[2026-03-14 09:05:00] Request exception\n"));
    assert_eq!(file.matches("Environment: SDB\n").count(), 2);
    assert!(file.find("No access_token").unwrap() < file.find("connection failed").unwrap());
}

/// Errors raised before any network traffic never produce a block.
#[test]
fn test_pre_network_errors_are_not_logged() {
    let unlogged = [
        TokenError::ConfigurationMissing,
        TokenError::ConfigurationInvalid("expected value at line 1 column 1".into()),
        TokenError::MissingSettings("STG".into()),
    ];

    for error in unlogged {
        assert!(!error.is_logged(), "{error:?}");
    }
}

/// Errors cross process boundaries as tagged JSON.
#[test]
fn test_error_json_shape() {
    let json = serde_json::to_value(TokenError::MissingSettings("STG".into())).unwrap();
    assert_eq!(json, serde_json::json!({"type": "MissingSettings", "message": "STG"}));

    let detail = FailureDetail::Exception { error: "boom".into() };
    let entry = FailureEntry::exception("PRD", "u", "boom", None);
    assert_eq!(entry.detail, detail);
}
