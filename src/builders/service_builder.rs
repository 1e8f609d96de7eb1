//! Wire a dispatch service from configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::config::DispatchConfig;
use crate::core::{
    AdmissionController, DispatchCoordinator, DispatchError, DispatchService, RandomPicker,
};
use crate::infra::random::{FallbackRandom, HttpRandom, LocalRandom, RandomSource};
use crate::infra::store::WorkerStore;
use crate::select::SelectionEngine;

/// Random source chain described by `cfg.random`: the remote provider backed by the
/// local generator, or the local generator alone.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built.
pub fn build_random_source(cfg: &DispatchConfig) -> Result<Arc<dyn RandomSource>, DispatchError> {
    if !cfg.random.enabled {
        return Ok(Arc::new(LocalRandom::new()));
    }
    let remote = HttpRandom::new(
        cfg.random.url.clone(),
        Duration::from_millis(cfg.random.timeout_ms),
    )
    .map_err(|e| DispatchError::Internal(format!("random provider client: {e}")))?;
    Ok(Arc::new(FallbackRandom::new(remote, LocalRandom::new())))
}

/// Build a dispatch service over `store` from validated configuration.
///
/// # Errors
///
/// Invalid configuration or random provider client failure.
pub fn build_service(
    cfg: &DispatchConfig,
    store: Arc<dyn WorkerStore>,
) -> Result<DispatchService, DispatchError> {
    cfg.validate()
        .map_err(|e| DispatchError::Internal(format!("config invalid: {e}")))?;

    let source = build_random_source(cfg)?;
    let coordinator = DispatchCoordinator::new(
        store,
        SelectionEngine::new(cfg.ranker),
        RandomPicker::new(source),
        cfg.map.into(),
        cfg.top_n,
    );
    tracing::info!(
        parallel_limit = cfg.parallel_limit,
        width = cfg.map.width,
        height = cfg.map.height,
        top_n = cfg.top_n,
        ranker = %cfg.ranker,
        remote_random = cfg.random.enabled,
        "dispatch service configured"
    );
    Ok(DispatchService::new(
        AdmissionController::new(cfg.parallel_limit),
        coordinator,
    ))
}
