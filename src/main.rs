//! jose-view: decode and inspect JWS envelopes from intercepted traffic.
//!
//! Entry point for the application. Parses CLI arguments, initializes
//! logging and delegates to the appropriate command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse CLI arguments and dispatch to the appropriate command handler.
fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match &cli.command {
        Commands::Prettify(args) => commands::prettify::execute(args)?,
        Commands::Priority(args) => commands::priority::execute(args)?,
        Commands::StreamMode(args) => commands::stream_mode::execute(args)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Log to stderr so stdout carries only the rendered body.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
