// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::sync::OnceLock;

use crate::config::NodeConfig;

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize telemetry (logs + metrics)
pub fn init_telemetry(cfg: &NodeConfig) {
    // 1. Tracing, RUST_LOG wins over the configured verbosity
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.log_filter())))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Prometheus
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            if PROM_HANDLE.set(handle).is_err() {
                tracing::warn!("Prometheus handle already set. Telemetry re-initialized?");
            }
        }
        Err(e) => tracing::error!("Failed to install Prometheus recorder: {}", e),
    }

    metrics::describe_counter!("building_requests_total", "Building API calls by operation and outcome");
    metrics::describe_gauge!("building_records", "Buildings currently stored");

    metrics::gauge!("building_node_up", 1.0);
}

pub fn record_request(op: &'static str, outcome: &'static str) {
    metrics::counter!("building_requests_total", 1, "op" => op, "outcome" => outcome);
}

pub fn record_count(count: usize) {
    metrics::gauge!("building_records", count as f64);
}

/// Get the Prometheus handle to render metrics
pub fn get_metrics() -> String {
    if let Some(handle) = PROM_HANDLE.get() {
        handle.render()
    } else {
        "# metrics not initialized".to_string()
    }
}
