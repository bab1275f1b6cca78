//! Handler for the `priority` subcommand.
//!
//! Lists every registered view with the priority it reports for the
//! given content type, highest first.

use anyhow::Result;
use serde::Serialize;

use jose_view::core::applicability::ContentMetadata;
use jose_view::view::{self, ViewRegistry};

use crate::cli::PriorityArgs;

#[derive(Debug, Serialize)]
struct PriorityReport<'a> {
    content_type: Option<&'a str>,
    views: Vec<ViewPriority<'a>>,
}

#[derive(Debug, Serialize)]
struct ViewPriority<'a> {
    name: &'a str,
    priority: f64,
}

/// Execute the `priority` subcommand with the given arguments.
pub fn execute(args: &PriorityArgs) -> Result<()> {
    let metadata = ContentMetadata {
        content_type: args.content_type.clone(),
    };

    let mut registry = ViewRegistry::with_defaults();
    view::start(&mut registry);

    let mut views: Vec<ViewPriority<'_>> = registry
        .views()
        .map(|view| ViewPriority {
            name: view.name(),
            priority: view.render_priority(&[], &metadata),
        })
        .collect();
    views.sort_by(|a, b| b.priority.total_cmp(&a.priority));

    if args.json {
        let report = PriorityReport {
            content_type: args.content_type.as_deref(),
            views,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in &views {
            println!("{}\t{}", entry.name, entry.priority);
        }
    }
    Ok(())
}
