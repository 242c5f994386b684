//! Shared infrastructure for the campusnav HTTP service.
//!
//! - [`AppState`]: the campus map, loaded once and shared between handlers
//! - [`health`]: liveness and readiness probes
//! - [`ProblemDetails`]: RFC 9457 Problem Details for error responses
//! - [`ServiceResponse`]: wrapper for successful responses with content type
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: structured logging setup
//! - [`middleware`]: request tracking and metrics middleware
//! - Query types with validation for each endpoint
//!
//! Handlers stay thin: they validate query parameters, call into
//! `campusnav-lib` and wrap the result. All search logic lives in the library.
//!
//! Enable the `test-utils` feature to use [`test_utils`] from dependent
//! crates.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_node_search, record_path_failed, record_path_found,
    record_path_hops, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId};
pub use problem::{
    ProblemDetails, PROBLEM_INVALID_REQUEST, PROBLEM_NO_MATCHING_NODES, PROBLEM_ROUTE_NOT_FOUND,
};
pub use request::{NodeSearchQuery, PathQuery, Validate};
pub use response::ServiceResponse;
pub use state::{AppState, AppStateError};
