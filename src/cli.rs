//! CLI argument definitions for jose-view.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `PrettifyArgs` implements a custom `Debug` that redacts the body, which
//! may carry account keys or CSRs, so it cannot leak through debug
//! formatting or logging.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Decode and pretty-print JWS envelopes (application/jose+json) as
/// exchanged with ACME servers.
#[derive(Debug, Parser)]
#[command(name = "jose-view")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log filter directive (e.g. "info", "jose_view=debug").
    #[arg(long, global = true, env = "JOSE_VIEW_LOG", default_value = "warn")]
    pub log_level: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode and render a message body with the best matching view.
    Prettify(PrettifyArgs),

    /// Show each view's render priority for a content type.
    Priority(PriorityArgs),

    /// Decide whether a response to the given request URL is streamed.
    StreamMode(StreamModeArgs),
}

/// Arguments for the `prettify` subcommand.
#[derive(clap::Args)]
pub struct PrettifyArgs {
    /// The message body. If omitted, reads from --body-env, --file or stdin.
    pub body: Option<String>,

    /// Read the body from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub body_env: Option<String>,

    /// Read the body from a file.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Declared content type of the message.
    #[arg(long, value_name = "TYPE", default_value = "application/jose+json")]
    pub content_type: String,

    /// Output plain text without colors.
    #[arg(long)]
    pub plain: bool,
}

/// Custom `Debug` that redacts the body to prevent accidental leakage.
impl fmt::Debug for PrettifyArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrettifyArgs")
            .field("body", &self.body.as_ref().map(|_| "[REDACTED]"))
            .field("body_env", &self.body_env)
            .field("file", &self.file)
            .field("content_type", &self.content_type)
            .field("plain", &self.plain)
            .finish()
    }
}

/// Arguments for the `priority` subcommand.
#[derive(Debug, clap::Args)]
pub struct PriorityArgs {
    /// Declared content type of the message. Omit for none.
    #[arg(long, value_name = "TYPE")]
    pub content_type: Option<String>,

    /// Output machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stream-mode` subcommand.
#[derive(Debug, clap::Args)]
pub struct StreamModeArgs {
    /// Full request URL, including the query string.
    pub url: String,
}
