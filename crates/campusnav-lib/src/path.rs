use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::graph::{Edge, Graph, NodeId};
use crate::heuristic::Heuristic;

/// Find the lowest-cost node sequence from `start` to `goal` with A*.
///
/// Returns `None` when the goal cannot be reached, including when either
/// endpoint is absent from the graph. `start == goal` yields `[start]`.
pub fn find_path<H>(graph: &Graph, heuristic: &H, start: &str, goal: &str) -> Option<Vec<NodeId>>
where
    H: Heuristic + ?Sized,
{
    let parents = search(graph, heuristic, start, goal)?;
    Some(reconstruct_nodes(&parents, start, goal))
}

/// Find the lowest-cost path from `start` to `goal` and return the traversed
/// edge records in start-to-goal order.
///
/// Each hop is resolved to the first edge in the predecessor's list that points
/// at the next node, so with parallel edges the reported record follows list
/// order. `start == goal` yields an empty path, which is still distinct from
/// `None`.
pub fn find_path_with_edges<H>(
    graph: &Graph,
    heuristic: &H,
    start: &str,
    goal: &str,
) -> Option<Vec<Edge>>
where
    H: Heuristic + ?Sized,
{
    let parents = search(graph, heuristic, start, goal)?;
    Some(reconstruct_edges(graph, &parents, start, goal))
}

/// Run A* and return the predecessor links once `goal` is popped.
///
/// The open set is a binary heap without decrease-key; improved nodes are
/// pushed again and outdated entries are skipped when popped.
fn search<'a, H>(
    graph: &'a Graph,
    heuristic: &H,
    start: &'a str,
    goal: &'a str,
) -> Option<HashMap<&'a str, &'a str>>
where
    H: Heuristic + ?Sized,
{
    let mut g_score: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start, 0.0);
    queue.push(AStarEntry::new(start, 0.0, heuristic.estimate(start, goal)));

    let mut expanded = 0usize;
    while let Some(entry) = queue.pop() {
        let current_score = match g_score.get(entry.node) {
            Some(score) if *score < entry.cost.0 => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == goal {
            debug!(start, goal, expanded, cost = current_score, "path found");
            return Some(parents);
        }

        expanded += 1;
        trace!(node = entry.node, g = current_score, f = entry.estimate.0, "expanding");

        for edge in graph.neighbours(entry.node) {
            let next = edge.to.as_str();
            let tentative_g = current_score + edge.weight;
            if tentative_g < *g_score.get(next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative_g);
                parents.insert(next, entry.node);
                queue.push(AStarEntry::new(
                    next,
                    tentative_g,
                    heuristic.estimate(next, goal),
                ));
            }
        }
    }

    debug!(start, goal, expanded, "open set exhausted without reaching goal");
    None
}

fn reconstruct_nodes(parents: &HashMap<&str, &str>, start: &str, goal: &str) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied();
    }
    path.reverse();
    path
}

fn reconstruct_edges(
    graph: &Graph,
    parents: &HashMap<&str, &str>,
    start: &str,
    goal: &str,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(&previous) = parents.get(current) else {
            break;
        };
        if let Some(edge) = graph
            .neighbours(previous)
            .iter()
            .find(|edge| edge.to == current)
        {
            edges.push(edge.clone());
        }
        current = previous;
    }
    edges.reverse();
    edges
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0).is_eq()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl<'a> AStarEntry<'a> {
    fn new(node: &'a str, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap pops the lowest estimate, then the
        // lexicographically smallest node.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for AStarEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
