//! Domain error types for jose-view.
//!
//! All business-logic errors are defined here using `thiserror`.
//! Field-level variants are recovered inside the envelope decoder;
//! every other variant propagates to the caller, which falls back to a
//! default rendering (library) or prints a message (CLI).

use thiserror::Error;

/// Errors that can occur while decoding or rendering a JWS envelope.
#[derive(Debug, Error)]
pub enum JoseViewError {
    /// A base64url-encoded envelope member could not be decoded.
    #[error("failed to decode {field}: invalid base64url encoding")]
    Base64Decode {
        /// Which member failed to decode (e.g., "protected", "payload").
        field: String,
    },

    /// A decoded envelope member is not valid UTF-8 JSON.
    #[error("failed to parse {field} as JSON: {reason}")]
    JsonParse {
        /// Which member failed to parse.
        field: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The message body itself is not valid UTF-8 JSON.
    #[error("message body is not valid JSON: {reason}")]
    InvalidBody {
        /// Description of the parsing failure.
        reason: String,
    },

    /// The message body is JSON but not a JSON object.
    #[error("message body is not a JWS envelope: expected a JSON object")]
    NotAnObject,

    /// A required envelope member is absent.
    #[error("message body is not a JWS envelope: missing '{field}' member")]
    MissingField {
        /// Name of the missing member.
        field: String,
    },

    /// A required envelope member is present but not a string.
    #[error("message body is not a JWS envelope: '{field}' is not a string")]
    FieldNotString {
        /// Name of the offending member.
        field: String,
    },

    /// Serializing a JSON value to text failed.
    #[error("failed to serialize JSON: {reason}")]
    Serialize {
        /// Description of the serialization failure.
        reason: String,
    },

    /// No message body was provided via any input method.
    #[error("no body provided: pass a body as an argument, via --body-env, --file, or through stdin")]
    NoBodyProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The specified environment variable name cannot be looked up.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },

    /// Failed to read the body from a file.
    #[error("failed to read body file '{path}': {reason}")]
    BodyFileError {
        /// Path to the body file.
        path: String,
        /// Description of the read failure.
        reason: String,
    },

    /// A request URL could not be parsed.
    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as given.
        url: String,
        /// Description of the parsing failure.
        reason: String,
    },
}
