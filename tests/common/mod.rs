//! Worker store fakes shared by integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use pickup_dispatch::builders::build_service;
use pickup_dispatch::config::DispatchConfig;
use pickup_dispatch::core::{DispatchService, Worker, WorkerId};
use pickup_dispatch::infra::store::{InMemoryWorkerStore, StoreError, WorkerStore};
use tokio::sync::Notify;

/// Store that fails every call.
pub struct FailingStore;

#[async_trait]
impl WorkerStore for FailingStore {
    async fn list_available(&self) -> Result<Vec<Worker>, StoreError> {
        Err(StoreError::Unavailable("database offline".into()))
    }

    async fn find_by_id(&self, _id: WorkerId) -> Result<Option<Worker>, StoreError> {
        Err(StoreError::Unavailable("database offline".into()))
    }

    async fn upsert(&self, _worker: Worker) -> Result<(), StoreError> {
        Err(StoreError::Rejected("read only".into()))
    }

    async fn is_occupied(
        &self,
        _x: i32,
        _y: i32,
        _excluding: Option<WorkerId>,
    ) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("database offline".into()))
    }
}

/// In-memory store whose `list_available` parks until released.
pub struct GatedStore {
    inner: InMemoryWorkerStore,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedStore {
    pub fn new(workers: Vec<Worker>) -> Self {
        Self {
            inner: InMemoryWorkerStore::from_workers(workers),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl WorkerStore for GatedStore {
    async fn list_available(&self) -> Result<Vec<Worker>, StoreError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.list_available().await
    }

    async fn find_by_id(&self, id: WorkerId) -> Result<Option<Worker>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn upsert(&self, worker: Worker) -> Result<(), StoreError> {
        self.inner.upsert(worker).await
    }

    async fn is_occupied(
        &self,
        x: i32,
        y: i32,
        excluding: Option<WorkerId>,
    ) -> Result<bool, StoreError> {
        self.inner.is_occupied(x, y, excluding).await
    }
}

/// Local-only configuration with the given parallel limit.
pub fn local_config(parallel_limit: u32) -> DispatchConfig {
    let mut cfg = DispatchConfig {
        parallel_limit,
        ..DispatchConfig::default()
    };
    cfg.random.enabled = false;
    cfg
}

/// Service over `store` with local randomness.
pub fn service(parallel_limit: u32, store: Arc<dyn WorkerStore>) -> DispatchService {
    build_service(&local_config(parallel_limit), store).unwrap()
}
