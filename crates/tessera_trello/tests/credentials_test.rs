//! Tests for filling credentials from the environment.
//!
//! `TrelloConfig::load` reads `TRELLO_API_KEY`, `TRELLO_TOKEN`, and
//! `TRELLO_BOARD_ID` from the process environment. Environment mutation is
//! process-global, so every test in this binary is serialized and rebuilds
//! the variables it depends on from scratch.

use serial_test::serial;
use tessera_error::TesseraErrorKind;
use tessera_trello::TrelloConfig;

const CREDENTIAL_KEYS: [&str; 3] = ["TRELLO_API_KEY", "TRELLO_TOKEN", "TRELLO_BOARD_ID"];

/// Remove every credential variable.
///
/// Safety of the mutation: all tests in this binary are `#[serial]`, so no
/// other thread reads the environment while it changes.
fn scrub_credentials() {
    for key in CREDENTIAL_KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

fn set_credential(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

#[test]
#[serial]
fn test_load_without_credentials_reports_the_api_key() {
    scrub_credentials();

    let error = TrelloConfig::load().expect_err("load should fail without credentials");
    assert!(
        matches!(error.kind(), TesseraErrorKind::Config(_)),
        "expected Config error, got {error}"
    );
    let message = error.to_string();
    assert!(message.contains("TRELLO_API_KEY"), "got: {message}");
    assert!(message.contains("environment"), "got: {message}");
}

#[test]
#[serial]
fn test_load_reports_the_next_missing_credential() {
    scrub_credentials();
    set_credential("TRELLO_API_KEY", "key-from-env");

    let error = TrelloConfig::load().expect_err("load should fail without a token");
    assert!(error.to_string().contains("TRELLO_TOKEN"), "got: {error}");

    scrub_credentials();
}

#[test]
#[serial]
fn test_load_fills_credentials_from_the_environment() {
    scrub_credentials();
    set_credential("TRELLO_API_KEY", "key-from-env");
    set_credential("TRELLO_TOKEN", "token-from-env");
    set_credential("TRELLO_BOARD_ID", "board-from-env");

    let config = TrelloConfig::load().expect("load should succeed with credentials set");
    assert_eq!(config.api_key, "key-from-env");
    assert_eq!(config.token, "token-from-env");
    assert_eq!(config.board_id, "board-from-env");

    scrub_credentials();
}
