//! Handler for the `stream-mode` subcommand.
//!
//! Prints whether a response to the given request URL would be streamed
//! rather than buffered.

use anyhow::Result;
use url::Url;

use jose_view::core::stream_mode::{self, QueryParams, ResponseFlags};
use jose_view::error::JoseViewError;

use crate::cli::StreamModeArgs;

/// Execute the `stream-mode` subcommand with the given arguments.
pub fn execute(args: &StreamModeArgs) -> Result<()> {
    let url = Url::parse(&args.url).map_err(|e| JoseViewError::InvalidUrl {
        url: args.url.clone(),
        reason: e.to_string(),
    })?;

    let mut flags = ResponseFlags::default();
    stream_mode::apply_stream_mode(&QueryParams::from_url(&url), &mut flags);
    println!("{}", flags.stream);
    Ok(())
}
