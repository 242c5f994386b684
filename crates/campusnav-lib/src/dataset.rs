use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable that overrides the campus map location.
pub const DATA_PATH_ENV: &str = "CAMPUSNAV_DATA_PATH";

/// Default filename for the campus map document.
const DATA_FILENAME: &str = "campus.json";

/// Resolve the default campus map location using platform-specific project
/// directories.
pub fn default_data_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "campusnav", "campusnav")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATA_FILENAME))
}

/// Pick the campus map path: an explicit path wins, then
/// `CAMPUSNAV_DATA_PATH`, then the platform data directory.
///
/// A directory resolves to `campus.json` inside it. The file is not required
/// to exist yet.
pub fn resolve_data_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match env::var_os(DATA_PATH_ENV) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => default_data_path()?,
        },
    };

    let path = if path.is_dir() {
        path.join(DATA_FILENAME)
    } else {
        path
    };
    debug!(path = %path.display(), "resolved campus map path");
    Ok(path)
}
