//! Campus navigation library entry points.
//!
//! This crate exposes helpers to locate and load a campus map document, look
//! up nodes by name, and run A* shortest-path searches that return either the
//! visited nodes or the traversed edge records. Higher-level consumers (CLI,
//! HTTP service) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod campus;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod lookup;
pub mod path;
pub mod routing;

pub use campus::{CampusMap, NodePosition};
pub use dataset::{default_data_path, resolve_data_path, DATA_PATH_ENV};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, NodeId};
pub use heuristic::{Euclidean, Heuristic, Zero};
pub use lookup::{fuzzy_node_matches, search_nodes};
pub use path::{find_path, find_path_with_edges};
pub use routing::{plan_route, HeuristicKind, RoutePlan, RouteRequest};
