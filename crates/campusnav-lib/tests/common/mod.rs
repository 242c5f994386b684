//! Common test utilities and fixture helpers.

use std::collections::HashMap;
use std::path::PathBuf;

use campusnav_lib::{CampusMap, Graph};

/// Path to the minimal campus map fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal_campus.json")
}

/// Load the fixture campus map.
pub fn fixture_campus() -> CampusMap {
    CampusMap::load(&fixture_path()).expect("fixture loads")
}

/// Cost of walking `path`, taking the cheapest of any parallel edges per hop.
#[allow(dead_code)]
pub fn cheapest_walk(graph: &Graph, path: &[String]) -> Option<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        graph
            .neighbours(&pair[0])
            .iter()
            .filter(|edge| edge.to == pair[1])
            .map(|edge| edge.weight)
            .reduce(f64::min)
            .map(|weight| total + weight)
    })
}

/// Exhaustive single-source shortest distances (Bellman-Ford style
/// relaxation until fixpoint), used as an oracle for the A* results.
#[allow(dead_code)]
pub fn oracle_distances(map: &CampusMap, start: &str) -> HashMap<String, f64> {
    let mut distances = HashMap::from([(start.to_string(), 0.0)]);
    loop {
        let mut changed = false;
        for (source, edge) in map.graph.edges() {
            let Some(&base) = distances.get(source) else {
                continue;
            };
            let candidate = base + edge.weight;
            let current = distances.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                distances.insert(edge.to.clone(), candidate);
                changed = true;
            }
        }
        if !changed {
            return distances;
        }
    }
}
