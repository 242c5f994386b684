//! Prometheus metrics infrastructure for the campus navigation service.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Initialize the Prometheus metrics recorder
//! - [`metrics_handler`]: Axum handler for `/metrics` endpoint
//! - Business metric helpers for path and node-search endpoints
//!
//! # Example
//!
//! ```no_run
//! use campusnav_service_shared::metrics::{MetricsConfig, init_metrics, metrics_handler};
//! use axum::{Router, routing::get};
//!
//! // Initialize metrics at startup
//! let config = MetricsConfig::default();
//! init_metrics(&config).expect("failed to initialize metrics");
//!
//! // Add metrics endpoint to router
//! let app: Router = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route the exposition endpoint is mounted on.
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Read `METRICS_ENABLED` (anything but "false" enables) and
    /// `METRICS_PATH`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| !v.eq_ignore_ascii_case("false"))
            .unwrap_or(defaults.enabled);
        let path = std::env::var("METRICS_PATH")
            .ok()
            .filter(|p| p.starts_with('/'))
            .unwrap_or(defaults.path);

        Self { enabled, path }
    }
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    #[error("metrics are disabled")]
    Disabled,
    #[error("metrics recorder already initialized")]
    AlreadyInitialized,
    #[error("failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

/// Install the Prometheus recorder. Call once at startup; later calls fail
/// with [`MetricsError::AlreadyInitialized`].
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }
    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)
}

/// Axum handler rendering the Prometheus exposition text.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Record a successful path search.
///
/// Increments `campusnav_paths_found_total`. `variant` is `nodes` or `edges`.
pub fn record_path_found(variant: &str) {
    metrics::counter!(
        "campusnav_paths_found_total",
        "variant" => variant.to_string()
    )
    .increment(1);
}

/// Record a failed path search.
///
/// Increments `campusnav_paths_failed_total`; `reason` is `no_path` or
/// `validation_error`.
pub fn record_path_failed(reason: &str, variant: &str) {
    metrics::counter!(
        "campusnav_paths_failed_total",
        "reason" => reason.to_string(),
        "variant" => variant.to_string()
    )
    .increment(1);
}

/// Record the number of hops of a found path in `campusnav_path_hops`.
pub fn record_path_hops(hops: usize, variant: &str) {
    metrics::histogram!(
        "campusnav_path_hops",
        "variant" => variant.to_string()
    )
    .record(hops as f64);
}

/// Record a node search and whether it matched anything.
pub fn record_node_search(matches: usize) {
    let outcome = if matches == 0 { "miss" } else { "hit" };
    metrics::counter!(
        "campusnav_node_searches_total",
        "outcome" => outcome
    )
    .increment(1);
}
