//! Query parameter types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
pub trait Validate {
    /// Validate the request. `request_id` populates the `instance` field of
    /// the returned problem.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Query string of `/pathfinding` and `/pathfindingWithEdges`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathQuery {
    /// Starting node identifier.
    #[serde(default)]
    pub start: String,

    /// Destination node identifier.
    #[serde(default)]
    pub end: String,
}

impl Validate for PathQuery {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.start.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'start' parameter is required and cannot be empty",
                request_id,
            )));
        }

        if self.end.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'end' parameter is required and cannot be empty",
                request_id,
            )));
        }

        Ok(())
    }
}

/// Query string of `/searchNodes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeSearchQuery {
    #[serde(default)]
    pub query: String,
}

impl Validate for NodeSearchQuery {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.query.trim().is_empty() {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'query' parameter is required and cannot be empty",
                request_id,
            )));
        }
        Ok(())
    }
}
