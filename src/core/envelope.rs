//! JWS envelope decoding.
//!
//! Decodes the base64url-encoded `protected` and `payload` members of a
//! JWS in JSON serialization and replaces them in place with the JSON
//! values they encode. The `signature` member and any other member are
//! passed through untouched.
//!
//! Errors come in two tiers. A member that cannot be decoded is logged and
//! left as its original string, so the rest of the envelope still renders.
//! A body that is not a JSON object, or that lacks `protected`/`payload`,
//! is not a JWS envelope and the error propagates.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::JoseViewError;

/// Envelope member holding the integrity-protected header.
pub const PROTECTED: &str = "protected";

/// Envelope member holding the signed content.
pub const PAYLOAD: &str = "payload";

/// Envelope member holding the signature. Never decoded.
pub const SIGNATURE: &str = "signature";

/// base64url encoding of `{}`, substituted for empty members.
const EMPTY_OBJECT_B64: &str = "e30";

/// URL-safe engine that requires canonical padding (we always pad first)
/// but accepts non-zero trailing bits, as most base64 decoders do.
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Parse a raw message body and decode it as a JWS envelope.
///
/// # Errors
///
/// Returns an error if the body is not UTF-8 JSON, is not a JSON object,
/// or lacks string-typed `protected` and `payload` members.
pub fn decode_body(body: &[u8]) -> Result<Value, JoseViewError> {
    let parsed: Value = serde_json::from_slice(body).map_err(|e| JoseViewError::InvalidBody {
        reason: e.to_string(),
    })?;

    match parsed {
        Value::Object(envelope) => decode_envelope(envelope).map(Value::Object),
        _ => Err(JoseViewError::NotAnObject),
    }
}

/// Decode the `protected` and `payload` members of an envelope in place.
///
/// Each member is decoded independently; a member that fails to decode is
/// left as its original string and the failure is logged.
///
/// # Errors
///
/// Returns an error if `protected` or `payload` is missing or is not a
/// string. Both are checked before anything is decoded.
pub fn decode_envelope(
    mut envelope: Map<String, Value>,
) -> Result<Map<String, Value>, JoseViewError> {
    for field in [PROTECTED, PAYLOAD] {
        match envelope.get(field) {
            Some(Value::String(_)) => {}
            Some(_) => {
                return Err(JoseViewError::FieldNotString {
                    field: field.to_string(),
                });
            }
            None => {
                return Err(JoseViewError::MissingField {
                    field: field.to_string(),
                });
            }
        }
    }

    for field in [PROTECTED, PAYLOAD] {
        let Some(Value::String(encoded)) = envelope.get(field) else {
            continue;
        };

        match decode_field(field, encoded) {
            Ok(decoded) => {
                debug!(field, "decoded envelope member");
                envelope.insert(field.to_string(), decoded);
            }
            Err(err) => {
                info!(field, error = %err, "leaving envelope member undecoded");
            }
        }
    }

    Ok(envelope)
}

/// Base64url-decode a single envelope member and parse it as JSON.
///
/// An empty member decodes to `{}`. Missing or partial `=` padding is
/// tolerated, as are the standard alphabet's `+` and `/`.
///
/// # Errors
///
/// Returns [`JoseViewError::Base64Decode`] for malformed base64 and
/// [`JoseViewError::JsonParse`] if the decoded bytes are not UTF-8 JSON.
pub fn decode_field(field: &str, encoded: &str) -> Result<Value, JoseViewError> {
    let encoded = if encoded.is_empty() {
        EMPTY_OBJECT_B64
    } else {
        encoded
    };

    let bytes = LENIENT_URL_SAFE
        .decode(pad(encoded))
        .map_err(|_| JoseViewError::Base64Decode {
            field: field.to_string(),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| JoseViewError::JsonParse {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

/// Normalize to the URL-safe alphabet and pad to a multiple of 4.
fn pad(encoded: &str) -> String {
    let trimmed = encoded.trim_end_matches('=');
    let missing = (4 - trimmed.len() % 4) % 4;

    let mut padded: String = trimmed
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    padded.extend(std::iter::repeat_n('=', missing));
    padded
}
