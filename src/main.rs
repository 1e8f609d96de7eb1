//! Pickup dispatch HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use pickup_dispatch::builders::build_service;
use pickup_dispatch::config::DispatchConfig;
use pickup_dispatch::core::AppResult;
use pickup_dispatch::infra::store::InMemoryWorkerStore;
use pickup_dispatch::runtime::serve;
use pickup_dispatch::util::init_tracing;

#[tokio::main]
async fn main() -> AppResult<()> {
    init_tracing();

    let cfg = DispatchConfig::from_env().map_err(|e| anyhow::anyhow!("configuration: {e}"))?;
    let store = Arc::new(InMemoryWorkerStore::from_workers(cfg.seed_workers.clone()));
    if store.is_empty() {
        tracing::warn!("no seed workers configured, orders fail until drivers report in");
    } else {
        tracing::info!(workers = store.len(), "worker store seeded");
    }

    let service = build_service(&cfg, store).context("building dispatch service")?;
    let listener = TcpListener::bind(&cfg.server.bind)
        .await
        .with_context(|| format!("binding {}", cfg.server.bind))?;

    serve(listener, service, shutdown_signal()).await?;
    tracing::info!("dispatch api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
