//! In-memory worker store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::{LocationUpdate, Worker, WorkerId};

use super::{StoreError, WorkerStore};

/// Worker store backed by a `parking_lot::RwLock` around an ordered map.
///
/// Reads clone a snapshot under the read lock, so callers never observe a write that
/// lands mid-iteration.
#[derive(Debug, Default)]
pub struct InMemoryWorkerStore {
    workers: RwLock<BTreeMap<WorkerId, Worker>>,
}

impl InMemoryWorkerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `workers`; later duplicates of an id win.
    #[must_use]
    pub fn from_workers(workers: impl IntoIterator<Item = Worker>) -> Self {
        let map = workers.into_iter().map(|w| (w.id, w)).collect();
        Self {
            workers: RwLock::new(map),
        }
    }

    /// Number of stored workers, available or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workers.read().len()
    }

    /// Whether the store holds no workers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workers.read().is_empty()
    }
}

#[async_trait]
impl WorkerStore for InMemoryWorkerStore {
    async fn list_available(&self) -> Result<Vec<Worker>, StoreError> {
        Ok(self
            .workers
            .read()
            .values()
            .filter(|w| w.available)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: WorkerId) -> Result<Option<Worker>, StoreError> {
        Ok(self.workers.read().get(&id).cloned())
    }

    async fn upsert(&self, worker: Worker) -> Result<(), StoreError> {
        self.workers.write().insert(worker.id, worker);
        Ok(())
    }

    async fn is_occupied(
        &self,
        x: i32,
        y: i32,
        excluding: Option<WorkerId>,
    ) -> Result<bool, StoreError> {
        Ok(self
            .workers
            .read()
            .values()
            .any(|w| w.available && w.x == x && w.y == y && Some(w.id) != excluding))
    }

    async fn place(
        &self,
        id: WorkerId,
        x: i32,
        y: i32,
    ) -> Result<Option<LocationUpdate>, StoreError> {
        let mut workers = self.workers.write();
        if workers
            .values()
            .any(|w| w.available && w.x == x && w.y == y && w.id != id)
        {
            return Ok(None);
        }
        let update = match workers.get_mut(&id) {
            Some(existing) => {
                existing.x = x;
                existing.y = y;
                LocationUpdate::Updated
            }
            None => {
                workers.insert(id, Worker::new(id, x, y));
                LocationUpdate::Created
            }
        };
        Ok(Some(update))
    }
}
