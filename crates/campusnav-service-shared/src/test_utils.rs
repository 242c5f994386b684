//! Test utilities for handler testing against the campus fixture.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::state::AppState;

/// Path to the fixture campus map shared by the workspace tests.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/minimal_campus.json"
);

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared `AppState` loaded from the fixture, cached after the first call.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let path = PathBuf::from(TEST_FIXTURE_PATH);
            AppState::load(&path)
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
        })
        .clone()
}

pub fn fixture_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// Node names in the fixture campus.
pub mod fixture_nodes {
    pub const NORTH_ENTRANCE: &str = "northEntrance";
    pub const LOBBY: &str = "lobby";
    pub const VC_OFFICE: &str = "Office of the VC";
    pub const LIBRARY: &str = "library";

    /// Present in the graph but without coordinates.
    pub const BURSARY: &str = "Bursary";

    /// Has coordinates but no edges in or out.
    pub const SECURITY_POST: &str = "Security Post";
}

/// Unique request ID for tests.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_path_exists() {
        let path = fixture_path();
        assert!(path.exists(), "fixture not found at {:?}", path);
    }

    #[test]
    fn test_state_contains_expected_nodes() {
        let state = test_state();
        let campus = state.campus();

        assert!(campus.position(fixture_nodes::NORTH_ENTRANCE).is_some());
        assert!(campus.position(fixture_nodes::BURSARY).is_none());
        assert!(campus.graph.contains(fixture_nodes::BURSARY));
        assert!(campus.graph.neighbours(fixture_nodes::SECURITY_POST).is_empty());
    }

    #[test]
    fn test_request_id_unique() {
        assert_ne!(test_request_id(), test_request_id());
    }
}
