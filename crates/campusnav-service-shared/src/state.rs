//! Application state for the HTTP service.
//!
//! The campus map is loaded once at startup and shared read-only between
//! handlers; searches never mutate it, so no locking is involved.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use campusnav_lib::{CampusMap, Error as LibError};
use thiserror::Error;

/// Error during application state initialization.
#[derive(Debug, Error)]
pub enum AppStateError {
    /// Campus map file not found.
    #[error("campus map not found: {0}")]
    DataNotFound(String),

    /// Failed to load or parse the campus map.
    #[error("failed to load campus map: {0}")]
    CampusLoad(#[source] LibError),
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        match err {
            LibError::DataNotFound { path } => Self::DataNotFound(path.display().to_string()),
            other => Self::CampusLoad(other),
        }
    }
}

/// Shared application state for all axum handlers.
///
/// Cheap to clone; share it via axum's `State` extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use campusnav_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) -> String {
///     format!("{} nodes", state.campus().nodes.len())
/// }
///
/// let state = AppState::load("static/campus.json").unwrap();
/// let app = Router::new().route("/count", get(handler)).with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    campus: CampusMap,
    source: Option<PathBuf>,
}

impl AppState {
    /// Load application state from a campus map document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let path = path.as_ref();

        tracing::info!(path = %path.display(), "loading campus map");
        let campus = CampusMap::load(path)?;
        tracing::info!(
            nodes = campus.nodes.len(),
            edges = campus.graph.edge_count(),
            "campus map loaded successfully"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                campus,
                source: Some(path.to_path_buf()),
            }),
        })
    }

    /// Create application state from an already-built map.
    pub fn from_campus(campus: CampusMap) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                campus,
                source: None,
            }),
        }
    }

    /// Access the loaded campus map.
    pub fn campus(&self) -> &CampusMap {
        &self.inner.campus
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("node_count", &self.inner.campus.nodes.len())
            .field("edge_count", &self.inner.campus.graph.edge_count())
            .field("source", &self.inner.source)
            .finish()
    }
}
