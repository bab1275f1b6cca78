//! Core decoding logic for JWS envelopes.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.

pub mod applicability;
pub mod envelope;
pub mod stream_mode;
