//! jose-view: readable rendering of JWS envelopes in intercepted traffic.
//!
//! ACME clients (RFC 8555) send every POST body as a JWS in JSON
//! serialization with `Content-Type: application/jose+json`:
//!
//! ```text
//! {
//!   "protected": "eyJhbGciOiJSUzI1Ni...E1MzY1Mjg1MCJ9",
//!   "payload": "eyJjc3IiOiJNSUlDblRDQ0FZ...EU3lHQ3BjLTlfanVBIn0",
//!   "signature": "qqYGqZDSSUwuLLxm6-...nygkb5S8igKPrw"
//! }
//! ```
//!
//! This crate decodes `protected` and `payload` in place (the signature is
//! left alone) and renders the result as indented, sorted-key JSON split
//! into syntax-classified fragments, ready for a traffic-inspection UI.
//!
//! ```
//! use jose_view::{ContentMetadata, prettify};
//!
//! let body = br#"{"protected": "eyJhbGciOiJSUzI1NiJ9", "payload": "e30", "signature": "abc"}"#;
//! let metadata = ContentMetadata::with_content_type("application/jose+json");
//! let text = prettify(body, &metadata).unwrap();
//! assert!(text.contains("\"alg\": \"RS256\""));
//! ```

#![forbid(unsafe_code)]

pub mod core;
pub mod display;
pub mod error;
pub mod view;

pub use crate::core::applicability::ContentMetadata;
pub use crate::display::json_printer::{Category, DisplayLine, Fragment, render, render_to_text};
pub use crate::error::JoseViewError;
pub use crate::view::{ContentView, ViewRegistry, prettify, render_priority};
