use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, NodeId};
use crate::heuristic::Euclidean;
use crate::path::{find_path, find_path_with_edges};

/// Planar coordinates of a node on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

impl NodePosition {
    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// In-memory campus map: node coordinates plus the directed, weighted graph.
///
/// The document is read once and never mutated afterwards. Top-level keys
/// other than `nodes` and `graph` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusMap {
    #[serde(default)]
    pub nodes: HashMap<NodeId, NodePosition>,
    #[serde(default)]
    pub graph: Graph,
}

impl CampusMap {
    /// Assemble a map from already-built parts.
    pub fn new(nodes: HashMap<NodeId, NodePosition>, graph: Graph) -> Self {
        Self { nodes, graph }
    }

    /// Parse a campus map document from a JSON string.
    pub fn from_json_str(document: &str) -> Result<Self> {
        let map: CampusMap = serde_json::from_str(document)?;
        map.report_inconsistencies();
        Ok(map)
    }

    /// Parse a campus map document from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let map: CampusMap = serde_json::from_reader(reader)?;
        map.report_inconsistencies();
        Ok(map)
    }

    /// Load the campus map document at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DataNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "loading campus map");
        let map = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            nodes = map.nodes.len(),
            sources = map.graph.len(),
            edges = map.graph.edge_count(),
            "campus map loaded"
        );
        Ok(map)
    }

    /// Coordinates of `node`, if the document provides them.
    pub fn position(&self, node: &str) -> Option<&NodePosition> {
        self.nodes.get(node)
    }

    /// Every known node identifier, from both the coordinate table and the
    /// adjacency list, sorted and de-duplicated.
    pub fn node_ids(&self) -> BTreeSet<&str> {
        self.nodes
            .keys()
            .map(String::as_str)
            .chain(self.graph.sources())
            .collect()
    }

    /// Heuristic backed by this map's coordinate table.
    pub fn euclidean(&self) -> Euclidean<'_> {
        Euclidean::new(&self.nodes)
    }

    /// Shortest node sequence from `start` to `goal` using the straight-line
    /// heuristic.
    pub fn find_path(&self, start: &str, goal: &str) -> Option<Vec<NodeId>> {
        find_path(&self.graph, &self.euclidean(), start, goal)
    }

    /// Shortest path from `start` to `goal` as the traversed edge records.
    pub fn find_path_with_edges(&self, start: &str, goal: &str) -> Option<Vec<Edge>> {
        find_path_with_edges(&self.graph, &self.euclidean(), start, goal)
    }

    /// Log edges that will make searches behave unexpectedly. The document is
    /// never rejected.
    fn report_inconsistencies(&self) {
        for (source, edge) in self.graph.edges() {
            if edge.weight < 0.0 || edge.weight.is_nan() {
                warn!(
                    from = source,
                    to = %edge.to,
                    weight = edge.weight,
                    "edge has a negative or NaN weight"
                );
            }
            if !self.nodes.contains_key(&edge.to) {
                debug!(
                    from = source,
                    to = %edge.to,
                    "edge target has no coordinates, heuristic falls back to zero"
                );
            }
        }
    }
}
