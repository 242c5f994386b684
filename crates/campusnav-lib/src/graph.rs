use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a node on the campus map (room name, passage, entrance).
pub type NodeId = String;

/// Directed edge within the campus graph.
///
/// Attributes beyond `to` and `weight` (for example the walking directions the
/// mobile client renders) are kept verbatim in `attributes` and serialized back
/// at the same level as the known fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Edge {
    /// Edge without extra attributes.
    pub fn new(to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            to: to.into(),
            weight,
            attributes: Map::new(),
        }
    }
}

/// Adjacency list keyed by source node; edge order is preserved from the
/// source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Return the outgoing edges of `node`. Unknown nodes have none.
    pub fn neighbours(&self, node: &str) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `node` appears as a source key.
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Source node identifiers, in no particular order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of source keys.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterate over `(source, edge)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &Edge)> {
        self.adjacency
            .iter()
            .flat_map(|(source, edges)| edges.iter().map(move |edge| (source.as_str(), edge)))
    }
}

impl FromIterator<(NodeId, Vec<Edge>)> for Graph {
    fn from_iter<I: IntoIterator<Item = (NodeId, Vec<Edge>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<NodeId, Vec<Edge>>> for Graph {
    fn from(adjacency: HashMap<NodeId, Vec<Edge>>) -> Self {
        Self { adjacency }
    }
}
