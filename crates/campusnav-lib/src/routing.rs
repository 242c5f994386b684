//! Route planning on top of the raw search.
//!
//! [`plan_route`] runs the edge-detail search once and derives everything a
//! caller usually wants from it: the node sequence, the traversed edge records
//! and the total cost.
//!
//! # Example
//!
//! ```ignore
//! use campusnav_lib::{plan_route, CampusMap, RouteRequest};
//!
//! let map = CampusMap::load("static/senate.json".as_ref())?;
//! let plan = plan_route(&map, &RouteRequest::new("northEntrance", "Office of the VC"))?;
//! println!("Route: {} hops, cost {}", plan.hop_count(), plan.total_weight);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::campus::CampusMap;
use crate::error::{Error, Result};
use crate::graph::{Edge, NodeId};
use crate::heuristic::{Heuristic, Zero};
use crate::path::find_path_with_edges;

/// Heuristic used to guide the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// Straight-line distance between node coordinates (A*).
    #[default]
    Euclidean,
    /// No estimate at all (Dijkstra).
    Zero,
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            HeuristicKind::Euclidean => "euclidean",
            HeuristicKind::Zero => "zero",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub heuristic: HeuristicKind,
}

impl RouteRequest {
    /// Request guided by the straight-line heuristic.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            heuristic: HeuristicKind::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: NodeId,
    pub goal: NodeId,
    /// Visited nodes, `start` first and `goal` last.
    pub steps: Vec<NodeId>,
    /// Traversed edge records, one per hop.
    pub edges: Vec<Edge>,
    pub total_weight: f64,
}

impl RoutePlan {
    fn from_edges(start: &str, goal: &str, edges: Vec<Edge>) -> Self {
        let steps = std::iter::once(start.to_string())
            .chain(edges.iter().map(|edge| edge.to.clone()))
            .collect();
        let total_weight = edges.iter().map(|edge| edge.weight).sum();
        Self {
            start: start.to_string(),
            goal: goal.to_string(),
            steps,
            edges,
            total_weight,
        }
    }

    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }
}

/// Plan a route for `request` over `map`.
///
/// Unknown endpoints are not reported separately: they simply cannot be
/// reached and produce [`Error::RouteNotFound`].
pub fn plan_route(map: &CampusMap, request: &RouteRequest) -> Result<RoutePlan> {
    let edges = match request.heuristic {
        HeuristicKind::Euclidean => search_edges(map, &map.euclidean(), request),
        HeuristicKind::Zero => search_edges(map, &Zero, request),
    }
    .ok_or_else(|| Error::RouteNotFound {
        start: request.start.clone(),
        goal: request.goal.clone(),
    })?;

    let plan = RoutePlan::from_edges(&request.start, &request.goal, edges);
    debug!(
        start = %plan.start,
        goal = %plan.goal,
        hops = plan.hop_count(),
        total_weight = plan.total_weight,
        heuristic = %request.heuristic,
        "route planned"
    );
    Ok(plan)
}

fn search_edges<H: Heuristic>(
    map: &CampusMap,
    heuristic: &H,
    request: &RouteRequest,
) -> Option<Vec<Edge>> {
    find_path_with_edges(&map.graph, heuristic, &request.start, &request.goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> CampusMap {
        CampusMap::from_json_str(
            r#"{
                "nodes": { "A": {"x": 0, "y": 0}, "B": {"x": 1, "y": 0}, "C": {"x": 3, "y": 0} },
                "graph": {
                    "A": [{ "to": "B", "weight": 1 }],
                    "B": [{ "to": "C", "weight": 2 }]
                }
            }"#,
        )
        .expect("fixture parses")
    }

    #[test]
    fn plan_collects_steps_and_cost() {
        let plan = plan_route(&campus(), &RouteRequest::new("A", "C")).expect("route exists");
        assert_eq!(plan.steps, vec!["A", "B", "C"]);
        assert_eq!(plan.hop_count(), 2);
        assert_eq!(plan.total_weight, 3.0);
    }

    #[test]
    fn zero_heuristic_finds_same_route() {
        let request = RouteRequest::new("A", "C").with_heuristic(HeuristicKind::Zero);
        let plan = plan_route(&campus(), &request).expect("route exists");
        assert_eq!(plan.steps, vec!["A", "B", "C"]);
    }

    #[test]
    fn trivial_route_has_no_hops() {
        let plan = plan_route(&campus(), &RouteRequest::new("B", "B")).expect("route exists");
        assert_eq!(plan.steps, vec!["B"]);
        assert_eq!(plan.hop_count(), 0);
        assert_eq!(plan.total_weight, 0.0);
    }

    #[test]
    fn unreachable_goal_is_route_not_found() {
        let err = plan_route(&campus(), &RouteRequest::new("C", "A")).unwrap_err();
        assert!(matches!(err, Error::RouteNotFound { .. }));
        assert!(err.to_string().contains("no route found between C and A"));
    }

    #[test]
    fn heuristic_kind_display() {
        assert_eq!(HeuristicKind::Euclidean.to_string(), "euclidean");
        assert_eq!(HeuristicKind::Zero.to_string(), "zero");
    }
}
