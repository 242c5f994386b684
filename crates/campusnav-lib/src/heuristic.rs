//! Distance estimates that guide the A* search.

use std::collections::HashMap;

use crate::campus::NodePosition;
use crate::graph::NodeId;

/// Estimate of the remaining cost from `node` to `goal`.
///
/// Shortest results are only guaranteed when the estimate never exceeds the
/// true remaining cost.
pub trait Heuristic {
    fn estimate(&self, node: &str, goal: &str) -> f64;
}

/// Straight-line distance between node coordinates.
///
/// Returns `0.0` when either node has no coordinates, which degrades the
/// search to uniform-cost for those nodes.
#[derive(Debug, Clone, Copy)]
pub struct Euclidean<'a> {
    nodes: &'a HashMap<NodeId, NodePosition>,
}

impl<'a> Euclidean<'a> {
    pub fn new(nodes: &'a HashMap<NodeId, NodePosition>) -> Self {
        Self { nodes }
    }
}

impl Heuristic for Euclidean<'_> {
    fn estimate(&self, node: &str, goal: &str) -> f64 {
        match (self.nodes.get(node), self.nodes.get(goal)) {
            (Some(from), Some(to)) => from.distance_to(to),
            _ => 0.0,
        }
    }
}

/// Always zero; turns A* into Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _node: &str, _goal: &str) -> f64 {
        0.0
    }
}

impl<F> Heuristic for F
where
    F: Fn(&str, &str) -> f64,
{
    fn estimate(&self, node: &str, goal: &str) -> f64 {
        self(node, goal)
    }
}
