//! Handler for the `prettify` subcommand.
//!
//! Renders a message body with the highest-priority view for its content
//! type. Supports reading the body from a CLI argument, environment
//! variable, file, or stdin. Bodies no view can render are printed raw.

use std::io::{self, IsTerminal, Read};

use anyhow::Result;
use tracing::info;

use jose_view::core::applicability::ContentMetadata;
use jose_view::display::terminal;
use jose_view::error::JoseViewError;
use jose_view::view::{self, ViewRegistry};

use crate::cli::PrettifyArgs;

/// Execute the `prettify` subcommand with the given arguments.
pub fn execute(args: &PrettifyArgs) -> Result<()> {
    let body = read_body(args)?;
    let metadata = ContentMetadata::with_content_type(args.content_type.as_str());

    let mut registry = ViewRegistry::with_defaults();
    view::start(&mut registry);

    let rendered = registry.render(&body, &metadata);
    info!(view = %rendered.view, "rendered body");

    let use_color = !args.plain && io::stdout().is_terminal();
    terminal::write_lines(&mut io::stdout().lock(), &rendered.lines, use_color)?;
    Ok(())
}

/// Resolve the body from, in order: the positional argument, the
/// environment variable named by `--body-env`, `--file`, or stdin.
fn read_body(args: &PrettifyArgs) -> Result<Vec<u8>, JoseViewError> {
    let body = if let Some(body) = args.body.as_deref() {
        body.as_bytes().to_vec()
    } else if let Some(name) = args.body_env.as_deref() {
        read_env_var(name)?.into_bytes()
    } else if let Some(path) = args.file.as_deref() {
        std::fs::read(path).map_err(|e| JoseViewError::BodyFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
    } else {
        read_stdin()?
    };

    let body = body.trim_ascii_end();
    if body.trim_ascii_start().is_empty() {
        return Err(JoseViewError::NoBodyProvided);
    }
    Ok(body.to_vec())
}

fn read_env_var(name: &str) -> Result<String, JoseViewError> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return Err(JoseViewError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }

    std::env::var(name).map_err(|_| JoseViewError::EnvVarNotFound {
        name: name.to_string(),
    })
}

fn read_stdin() -> Result<Vec<u8>, JoseViewError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(JoseViewError::NoBodyProvided);
    }

    let mut buf = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut buf)
        .map_err(|_| JoseViewError::NoBodyProvided)?;
    Ok(buf)
}
