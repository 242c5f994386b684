//! Campus map summary command handler.

use std::io;
use std::path::Path;

use anyhow::Result;

use crate::commands::load_campus;
use crate::output::{write_info, write_json, CampusInfo, OutputFormat};

/// Handle the `info` subcommand.
pub fn handle_info_command(data: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (path, campus) = load_campus(data)?;
    let info = CampusInfo {
        source: path.display().to_string(),
        nodes: campus.node_ids().len(),
        positioned_nodes: campus.nodes.len(),
        edges: campus.graph.edge_count(),
    };

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => write_info(&mut stdout, &info)?,
        OutputFormat::Json => write_json(&mut stdout, &info)?,
    }
    Ok(())
}
