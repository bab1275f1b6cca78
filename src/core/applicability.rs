//! Render-priority decisions based on declared content metadata.
//!
//! Only the content type is consulted; the body is never inspected.

use serde::Serialize;

/// Media type prefix of a JWS in JSON serialization (RFC 8555 §6.2).
pub const JOSE_JSON_CONTENT_TYPE: &str = "application/jose+json";

/// Priority returned when the JWS view should be used.
pub const PRIORITY_JOSE_JSON: f64 = 2.0;

/// Priority of the generic JSON view for JSON content types.
pub const PRIORITY_GENERIC_JSON: f64 = 1.0;

/// Priority returned when a view does not apply.
pub const PRIORITY_DISABLED: f64 = 0.0;

/// Declared metadata of an inspected message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentMetadata {
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
}

impl ContentMetadata {
    /// Metadata for a message with the given content type.
    pub fn with_content_type(content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
        }
    }

    /// The media type without parameters, lowercased.
    fn essence(&self) -> Option<String> {
        self.content_type.as_deref().map(|ct| {
            ct.split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
    }
}

/// Priority of the JWS view for a message.
///
/// Outranks the generic JSON view when the content type starts with
/// `application/jose+json` (parameters such as `charset` are allowed),
/// and disables the view otherwise.
pub fn jose_json_priority(metadata: &ContentMetadata) -> f64 {
    match metadata.content_type.as_deref() {
        Some(ct) if ct.starts_with(JOSE_JSON_CONTENT_TYPE) => PRIORITY_JOSE_JSON,
        _ => PRIORITY_DISABLED,
    }
}

/// Priority of the generic JSON view for a message.
pub fn generic_json_priority(metadata: &ContentMetadata) -> f64 {
    match metadata.essence() {
        Some(essence) if essence == "application/json" || essence.ends_with("+json") => {
            PRIORITY_GENERIC_JSON
        }
        _ => PRIORITY_DISABLED,
    }
}
