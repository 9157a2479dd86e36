// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::extract::Request;
use axum::ServiceExt;
use building_node::config::{NodeArgs, NodeConfig, SHUTDOWN_GRACE};
use building_node::server::{build_app, SharedService, ROUTES};
use building_node::telemetry::init_telemetry;
use building_store::BuildingService;
use clap::Parser;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = NodeArgs::parse();
    let cfg = NodeConfig::from_args(&args)?;

    init_telemetry(&cfg);

    tracing::info!("Initializing Building Node with config: {:?}", cfg);

    let service: SharedService = Arc::new(BuildingService::new(cfg.required_fields));
    tracing::info!("Required fields policy: {:?}", service.policy());
    let app = build_app(service);

    for (method, path) in ROUTES {
        tracing::info!("... {} {}", method, path);
    }

    let addr = cfg.bind_addr;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    let stop = Arc::new(Notify::new());
    let stopped = stop.clone();
    let server = tokio::spawn(
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(async move { stopped.notified().await })
            .into_future(),
    );

    shutdown_signal().await;
    stop.notify_one();

    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(joined) => {
            joined??;
            tracing::info!("Server gracefully stopped");
        }
        Err(_) => tracing::warn!("Shutdown grace of {:?} elapsed, dropping open connections", SHUTDOWN_GRACE),
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, run until killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down service...");
}
