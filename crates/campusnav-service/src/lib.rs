//! Campus navigation HTTP service.
//!
//! # Endpoints
//!
//! - `GET /` - greeting
//! - `GET /hello/{name}` - personalised greeting
//! - `GET /pathfinding?start=&end=` - node sequence of the shortest path
//! - `GET /pathfindingWithEdges?start=&end=` - edge records of the shortest path
//! - `GET /searchNodes?query=` - case-insensitive node name lookup
//! - `GET /static/*` - map assets
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live`, `GET /health/ready` - probes

use std::path::Path;

use axum::{
    extract::{Path as UrlPath, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use campusnav_lib::{fuzzy_node_matches, search_nodes, Edge, NodeId};
use campusnav_service_shared::{
    health_live, health_ready, metrics_handler, record_node_search, record_path_failed,
    record_path_found, record_path_hops, AppState, MetricsLayer, NodeSearchQuery, PathQuery,
    ProblemDetails, RequestId, ServiceResponse, Validate,
};

/// Number of "did you mean" names offered when a search matches nothing.
const MAX_SUGGESTIONS: usize = 3;

/// HTTP response: either a wrapped payload or an RFC 9457 problem.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success(ServiceResponse<T>),
    Error(ProblemDetails),
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            ApiResponse::Success(data) => (StatusCode::OK, data).into_response(),
            ApiResponse::Error(problem) => problem.into_response(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub msg: String,
}

#[derive(Debug, Serialize)]
pub struct NodePathResponse {
    pub path: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct EdgePathResponse {
    pub path: Vec<Edge>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct NodeSearchResponse {
    pub nodes: Vec<NodeId>,
}

/// Default route of the Prometheus scrape endpoint.
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// Build the service router with state and middleware attached.
///
/// Files under `static_dir` are served at `/static`; the Prometheus exporter
/// is mounted at `metrics_path`.
pub fn app(state: AppState, static_dir: &Path, metrics_path: &str) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/hello/{name}", get(hello_handler))
        .route("/pathfinding", get(pathfinding_handler))
        .route("/pathfindingWithEdges", get(pathfinding_with_edges_handler))
        .route("/searchNodes", get(search_nodes_handler))
        .route(metrics_path, get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(MetricsLayer)
        .with_state(state)
}

async fn root_handler() -> ServiceResponse<Greeting> {
    ServiceResponse::new(Greeting {
        msg: "Hello from campusnav".to_string(),
    })
}

async fn hello_handler(UrlPath(name): UrlPath<String>) -> ServiceResponse<Greeting> {
    ServiceResponse::new(Greeting {
        msg: format!("Hello, {}!", name),
    })
}

/// Handle `GET /pathfinding`.
async fn pathfinding_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<PathQuery>,
) -> ApiResponse<NodePathResponse> {
    if let Err(problem) = query.validate(request_id.as_str()) {
        record_path_failed("validation_error", "nodes");
        return ApiResponse::Error(*problem);
    }

    info!(
        request_id = %request_id,
        start = %query.start,
        end = %query.end,
        "handling pathfinding request"
    );

    match state.campus().find_path(&query.start, &query.end) {
        Some(path) => {
            let hops = path.len().saturating_sub(1);
            record_path_found("nodes");
            record_path_hops(hops, "nodes");
            info!(request_id = %request_id, hops, "path found");
            ApiResponse::Success(ServiceResponse::new(NodePathResponse { path }))
        }
        None => {
            warn!(
                request_id = %request_id,
                start = %query.start,
                end = %query.end,
                "no path found"
            );
            record_path_failed("no_path", "nodes");
            ApiResponse::Error(ProblemDetails::route_not_found(
                &query.start,
                &query.end,
                request_id.as_str(),
            ))
        }
    }
}

/// Handle `GET /pathfindingWithEdges`.
async fn pathfinding_with_edges_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<PathQuery>,
) -> ApiResponse<EdgePathResponse> {
    if let Err(problem) = query.validate(request_id.as_str()) {
        record_path_failed("validation_error", "edges");
        return ApiResponse::Error(*problem);
    }

    info!(
        request_id = %request_id,
        start = %query.start,
        end = %query.end,
        "handling pathfinding with edges request"
    );

    match state.campus().find_path_with_edges(&query.start, &query.end) {
        Some(path) => {
            record_path_found("edges");
            record_path_hops(path.len(), "edges");
            info!(request_id = %request_id, hops = path.len(), "path found");
            ApiResponse::Success(ServiceResponse::new(EdgePathResponse {
                path,
                message: "Path found successfully".to_string(),
            }))
        }
        None => {
            warn!(
                request_id = %request_id,
                start = %query.start,
                end = %query.end,
                "no path found"
            );
            record_path_failed("no_path", "edges");
            ApiResponse::Error(ProblemDetails::route_not_found(
                &query.start,
                &query.end,
                request_id.as_str(),
            ))
        }
    }
}

/// Handle `GET /searchNodes`.
async fn search_nodes_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<NodeSearchQuery>,
) -> ApiResponse<NodeSearchResponse> {
    if let Err(problem) = query.validate(request_id.as_str()) {
        return ApiResponse::Error(*problem);
    }

    let campus = state.campus();
    let nodes = search_nodes(campus, &query.query);
    record_node_search(nodes.len());

    if nodes.is_empty() {
        let suggestions = fuzzy_node_matches(campus, &query.query, MAX_SUGGESTIONS);
        info!(
            request_id = %request_id,
            query = %query.query,
            suggestions = suggestions.len(),
            "no nodes matched"
        );
        return ApiResponse::Error(ProblemDetails::no_matching_nodes(
            &query.query,
            suggestions,
            request_id.as_str(),
        ));
    }

    info!(request_id = %request_id, query = %query.query, matches = nodes.len(), "nodes matched");
    ApiResponse::Success(ServiceResponse::new(NodeSearchResponse { nodes }))
}
