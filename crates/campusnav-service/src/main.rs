//! Campus navigation HTTP service binary.
//!
//! # Configuration
//!
//! - `CAMPUSNAV_DATA_PATH` - path to the campus map JSON (default: platform data dir)
//! - `CAMPUSNAV_STATIC_DIR` - directory served under `/static` (default: the map's directory)
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8080)

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{error, info};

use campusnav_lib::resolve_data_path;
use campusnav_service::app;
use campusnav_service_shared::{
    init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig,
};

const STATIC_DIR_ENV: &str = "CAMPUSNAV_STATIC_DIR";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logging_config = LoggingConfig::from_env().with_service("campusnav");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Metrics are optional
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let data_path = resolve_data_path(None).context("failed to resolve campus map path")?;
    let static_dir = env::var(STATIC_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_static_dir(&data_path));
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(
        data_path = %data_path.display(),
        static_dir = %static_dir.display(),
        port = port,
        "starting campusnav service"
    );

    let state = AppState::load(&data_path)
        .inspect_err(|e| {
            error!(
                error = %e,
                path = %data_path.display(),
                "failed to load application state"
            )
        })
        .with_context(|| format!("failed to load campus map from {}", data_path.display()))?;

    let router = app(state, &static_dir, &metrics_config.path);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn default_static_dir(data_path: &Path) -> PathBuf {
    data_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
