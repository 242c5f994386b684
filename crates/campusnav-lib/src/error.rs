use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Searches never return this: an unreachable goal is `None`. Only loading and
/// route planning surface errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Campus map document could not be located at the resolved path.
    #[error("campus map not found at {path}")]
    DataNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for campus map data")]
    ProjectDirsUnavailable,

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for JSON decoding errors.
    #[error("invalid campus map document: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
