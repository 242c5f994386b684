//! Node search command handler.

use std::io;
use std::path::Path;

use anyhow::{bail, Result};
use serde::Serialize;

use campusnav_lib::{fuzzy_node_matches, search_nodes};

use crate::commands::load_campus;
use crate::output::{write_json, write_nodes, OutputFormat};

const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Serialize)]
struct SearchResult<'a> {
    nodes: &'a [String],
}

/// Handle the `search` subcommand.
///
/// Fails when nothing matches, naming close matches when there are any.
pub fn handle_search_command(
    data: Option<&Path>,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let (_, campus) = load_campus(data)?;
    let nodes = search_nodes(&campus, query);

    if nodes.is_empty() {
        let suggestions = fuzzy_node_matches(&campus, query, MAX_SUGGESTIONS);
        if suggestions.is_empty() {
            bail!("no locations match '{}'", query);
        }
        bail!(
            "no locations match '{}'. Did you mean: {}?",
            query,
            suggestions.join(", ")
        );
    }

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => write_nodes(&mut stdout, &nodes)?,
        OutputFormat::Json => write_json(&mut stdout, &SearchResult { nodes: &nodes })?,
    }
    Ok(())
}
