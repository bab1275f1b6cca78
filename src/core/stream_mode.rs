//! Streaming-mode selection for watch requests.
//!
//! Kubernetes clients add `?watch=true` when they expect a long-lived
//! response carrying object updates. Buffering such a response would block
//! the client, so it is streamed instead.

use tracing::{debug, info};
use url::Url;

/// Query parameter that requests a streamed response.
pub const WATCH_PARAM: &str = "watch";

/// Ordered multi-map of decoded query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Build from decoded `(name, value)` pairs, preserving order.
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Decoded query parameters of a request URL.
    pub fn from_url(url: &Url) -> Self {
        Self::new(
            url.query_pairs()
                .map(|(name, value)| (name.into_owned(), value.into_owned()))
                .collect(),
        )
    }

    /// First value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Per-response flags a proxy consults before reading the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseFlags {
    /// Stream the body to the client instead of buffering it.
    pub stream: bool,
}

/// Whether a request with these query parameters should be streamed.
///
/// True exactly when the first `watch` value is the literal `"true"`.
pub fn select_streaming(query: &QueryParams) -> bool {
    query.get(WATCH_PARAM) == Some("true")
}

/// Set `flags.stream` for a response to a request with `query`.
pub fn apply_stream_mode(query: &QueryParams, flags: &mut ResponseFlags) {
    debug!(?query, "query params");

    flags.stream = select_streaming(query);
    if flags.stream {
        info!("streaming response");
    }
}
