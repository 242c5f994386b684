// Module exports for CLI subcommands
//
// Each module handles one subcommand; main.rs only parses arguments and
// dispatches to these handlers.

pub mod info;
pub mod route;
pub mod search;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use campusnav_lib::{resolve_data_path, CampusMap};

/// Resolve and load the campus map named by `--data` (or its fallbacks).
pub fn load_campus(data: Option<&Path>) -> Result<(PathBuf, CampusMap)> {
    let path = resolve_data_path(data).context("failed to resolve campus map path")?;
    let campus = CampusMap::load(&path)
        .with_context(|| format!("failed to load campus map from {}", path.display()))?;
    Ok((path, campus))
}
