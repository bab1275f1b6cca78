//! Integration tests for the jose-view CLI.
//!
//! Tests argument parsing, help text, version output, subcommand routing,
//! prettify behavior, fallbacks, and error handling.

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> assert_cmd::Command {
    cargo_bin_cmd!("jose-view")
}

// --- Help and Version ---

#[test]
fn test_no_args_shows_usage_hint() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_flag_shows_description() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("JWS"))
        .stdout(predicate::str::contains("ACME"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jose-view"))
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_prettify_help_shows_options() {
    cmd()
        .args(["prettify", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--body-env"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--content-type"))
        .stdout(predicate::str::contains("--plain"))
        .stdout(predicate::str::contains("[BODY]"));
}

#[test]
fn test_unknown_subcommand_fails() {
    cmd().arg("unknown").assert().failure().stderr(
        predicate::str::contains("invalid value 'unknown'")
            .or(predicate::str::contains("unrecognized subcommand")),
    );
}

#[test]
fn test_unknown_flag_fails() {
    cmd()
        .args(["prettify", "--nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

// --- Prettify: Decoding ---

#[test]
fn test_prettify_decodes_protected_and_payload() {
    cmd()
        .args(["prettify", "--plain", common::SIMPLE_ENVELOPE])
        .assert()
        .success()
        .stdout(
            "{\n    \"payload\": {},\n    \"protected\": {\n        \"alg\": \"RS256\"\n    },\n    \"signature\": \"abc\"\n}\n",
        );
}

#[test]
fn test_prettify_acme_finalize() {
    let output = cmd()
        .args(["prettify", "--plain"])
        .arg(common::acme_finalize_envelope())
        .output()
        .expect("failed to execute");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON output");
    assert_eq!(parsed["protected"]["alg"], "RS256");
    assert_eq!(
        parsed["payload"]["csr"],
        "MIICnTCCAYUCAQAwADCCASIwDQYJKoZIhvcNAQEBBQAD"
    );
    assert_eq!(parsed["signature"], "qqYGqZDSSUwuLLxm6-nygkb5S8igKPrw");
    assert!(stdout.contains("    \"protected\": {\n        \"alg\""));
}

#[test]
fn test_prettify_post_as_get_payload_is_empty_object() {
    cmd()
        .args(["prettify", "--plain", common::POST_AS_GET_ENVELOPE])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"payload\": {}"))
        .stdout(predicate::str::contains("\"signature\": \"c2ln\""));
}

#[test]
fn test_prettify_keeps_malformed_payload_as_string() {
    cmd()
        .args(["prettify", "--plain", common::MALFORMED_PAYLOAD_ENVELOPE])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"payload\": \"%%%not-base64%%%\""))
        .stdout(predicate::str::contains("\"alg\": \"RS256\""));
}

#[test]
fn test_prettify_preserves_non_ascii() {
    let body = common::envelope(
        &serde_json::json!({"alg": "ES256"}),
        &serde_json::json!({"contact": ["mailto:zoë@例え.jp"]}),
    );
    cmd()
        .args(["prettify", "--plain"])
        .arg(body)
        .assert()
        .success()
        .stdout(predicate::str::contains("mailto:zoë@例え.jp"));
}

#[test]
fn test_prettify_plain_output_has_no_escape_codes() {
    cmd()
        .args(["prettify", "--plain", common::SIMPLE_ENVELOPE])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

// --- Prettify: Fallbacks ---

#[test]
fn test_prettify_missing_payload_falls_back_to_raw() {
    cmd()
        .args(["prettify", "--plain", common::MISSING_PAYLOAD_ENVELOPE])
        .assert()
        .success()
        .stdout(format!("{}\n", common::MISSING_PAYLOAD_ENVELOPE));
}

#[test]
fn test_prettify_not_json_falls_back_to_raw() {
    cmd()
        .args(["prettify", "--plain", common::NOT_JSON])
        .assert()
        .success()
        .stdout(format!("{}\n", common::NOT_JSON));
}

#[test]
fn test_prettify_plain_json_uses_generic_view() {
    // Without the jose content type the envelope is not decoded.
    cmd()
        .args([
            "prettify",
            "--plain",
            "--content-type",
            "application/json",
            common::SIMPLE_ENVELOPE,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"protected\": \"eyJhbGciOiJSUzI1NiJ9\""));
}

#[test]
fn test_prettify_fallback_is_logged_at_debug() {
    cmd()
        .args([
            "--log-level",
            "debug",
            "prettify",
            "--plain",
            common::MISSING_PAYLOAD_ENVELOPE,
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("rendering raw body"));
}

#[test]
fn test_prettify_field_failure_is_logged_at_info() {
    cmd()
        .args(["prettify", "--plain", common::MALFORMED_PAYLOAD_ENVELOPE])
        .env("JOSE_VIEW_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("leaving envelope member undecoded"));
}

// --- Prettify: Input Sources ---

#[test]
fn test_prettify_from_stdin() {
    cmd()
        .args(["prettify", "--plain"])
        .write_stdin(format!("{}\n", common::SIMPLE_ENVELOPE))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"alg\": \"RS256\""));
}

#[test]
fn test_prettify_from_env_var() {
    cmd()
        .args(["prettify", "--plain", "--body-env", "TEST_JWS_BODY"])
        .env("TEST_JWS_BODY", common::SIMPLE_ENVELOPE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"alg\": \"RS256\""));
}

#[test]
fn test_prettify_env_var_not_set_shows_error() {
    cmd()
        .args(["prettify", "--body-env", "NONEXISTENT_JWS_VAR"])
        .env_remove("NONEXISTENT_JWS_VAR")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NONEXISTENT_JWS_VAR"));
}

#[test]
fn test_prettify_invalid_env_var_name() {
    cmd()
        .args(["prettify", "--body-env", "BAD=NAME"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid environment variable name"));
}

#[test]
fn test_prettify_from_file() {
    let path = std::env::temp_dir().join(format!("jose-view-body-{}.json", std::process::id()));
    std::fs::write(&path, common::SIMPLE_ENVELOPE).unwrap();

    cmd()
        .args(["prettify", "--plain", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"alg\": \"RS256\""));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_prettify_missing_file_shows_error() {
    cmd()
        .args(["prettify", "--file", "/nonexistent/jose-view/body.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read body file"));
}

#[test]
fn test_prettify_no_body_shows_error() {
    cmd()
        .arg("prettify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no body provided"));
}

#[test]
fn test_prettify_empty_body_arg_shows_error() {
    cmd()
        .args(["prettify", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no body provided"));
}

// --- Priority ---

#[test]
fn test_priority_jose_json_outranks_generic() {
    cmd()
        .args(["priority", "--content-type", "application/jose+json; charset=utf-8"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("JOSE-JSON\t2\n"))
        .stdout(predicate::str::contains("JSON\t1"));
}

#[test]
fn test_priority_plain_json_disables_jose() {
    cmd()
        .args(["priority", "--content-type", "application/json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JOSE-JSON\t0"));
}

#[test]
fn test_priority_json_output() {
    let output = cmd()
        .args(["priority", "--json", "--content-type", "application/jose+json"])
        .output()
        .expect("failed to execute");

    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid JSON output");
    assert_eq!(parsed["content_type"], "application/jose+json");
    assert_eq!(parsed["views"][0]["name"], "JOSE-JSON");
    assert_eq!(parsed["views"][0]["priority"], 2.0);
}

// --- Stream Mode ---

#[test]
fn test_stream_mode_watch_true() {
    cmd()
        .args(["stream-mode", "https://10.0.0.1:6443/api/v1/pods?watch=true"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_stream_mode_without_watch() {
    cmd()
        .args(["stream-mode", "https://10.0.0.1:6443/api/v1/pods"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_stream_mode_invalid_url_shows_error() {
    cmd()
        .args(["stream-mode", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid request URL"));
}
