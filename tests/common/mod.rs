//! Shared test fixtures and helper utilities.
//!
//! Provides JWS envelope bodies with known contents for use in the
//! integration tests.
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// An ACME newAccount-style request body.
///
/// Protected: `{"alg":"RS256"}`
/// Payload: `{}`
pub const SIMPLE_ENVELOPE: &str =
    r#"{"protected": "eyJhbGciOiJSUzI1NiJ9", "payload": "e30", "signature": "abc"}"#;

/// An ACME POST-as-GET body: the payload is the empty string.
pub const POST_AS_GET_ENVELOPE: &str =
    r#"{"protected": "eyJhbGciOiJSUzI1NiJ9", "payload": "", "signature": "c2ln"}"#;

/// An envelope whose payload is not base64url.
pub const MALFORMED_PAYLOAD_ENVELOPE: &str = r#"{"protected": "eyJhbGciOiJSUzI1NiJ9", "payload": "%%%not-base64%%%", "signature": "abc"}"#;

/// An envelope without a payload member.
pub const MISSING_PAYLOAD_ENVELOPE: &str =
    r#"{"protected": "eyJhbGciOiJSUzI1NiJ9", "signature": "abc"}"#;

/// A body that is not JSON at all.
pub const NOT_JSON: &str = "this is not json";

pub const JOSE_CONTENT_TYPE: &str = "application/jose+json";

/// Base64url-encode a JSON value without padding, as JWS does.
pub fn b64url_json(value: &serde_json::Value) -> String {
    URL_SAFE_NO_PAD.encode(value.to_string())
}

/// Build an envelope body from protected header and payload values.
pub fn envelope(protected: &serde_json::Value, payload: &serde_json::Value) -> String {
    serde_json::json!({
        "protected": b64url_json(protected),
        "payload": b64url_json(payload),
        "signature": "qqYGqZDSSUwuLLxm6-nygkb5S8igKPrw"
    })
    .to_string()
}

/// A realistic ACME finalize request.
pub fn acme_finalize_envelope() -> String {
    envelope(
        &serde_json::json!({
            "alg": "RS256",
            "kid": "https://acme-v02.api.letsencrypt.org/acme/acct/204416270",
            "nonce": "01017mM9r6R_TpKL-5zxAmMF5JmTCBI-v6AsLlGedj3pD1E",
            "url": "https://acme-v02.api.letsencrypt.org/acme/finalize/204416270/25153652850"
        }),
        &serde_json::json!({"csr": "MIICnTCCAYUCAQAwADCCASIwDQYJKoZIhvcNAQEBBQAD"}),
    )
}
