//! Worker store abstraction.
//!
//! The store owns worker records. Dispatch only reads snapshots through
//! [`WorkerStore::list_available`]; location updates go through the remaining calls.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::{LocationUpdate, Worker, WorkerId};

pub use memory::InMemoryWorkerStore;

/// Errors produced by store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend could not be reached.
    #[error("worker store unavailable: {0}")]
    Unavailable(String),
    /// Backend rejected the write.
    #[error("worker store rejected write: {0}")]
    Rejected(String),
}

/// Read/write access to worker records.
///
/// A single call must return a stable snapshot: the returned collection never changes
/// while the caller iterates it.
#[async_trait]
pub trait WorkerStore: Send + Sync {
    /// Every worker currently marked available.
    async fn list_available(&self) -> Result<Vec<Worker>, StoreError>;

    /// Look up a worker by id.
    async fn find_by_id(&self, id: WorkerId) -> Result<Option<Worker>, StoreError>;

    /// Insert or replace a worker record.
    async fn upsert(&self, worker: Worker) -> Result<(), StoreError>;

    /// Whether an available worker other than `excluding` stands on `(x, y)`.
    async fn is_occupied(
        &self,
        x: i32,
        y: i32,
        excluding: Option<WorkerId>,
    ) -> Result<bool, StoreError>;

    /// Register worker `id` at `(x, y)` or move it there, keeping its availability.
    /// Returns `None` when another available worker already stands on the cell.
    ///
    /// The default runs [`is_occupied`](Self::is_occupied),
    /// [`find_by_id`](Self::find_by_id) and [`upsert`](Self::upsert) as separate calls,
    /// so two concurrent moves onto one cell can both succeed. Backends that can check
    /// and write in one step override it; [`InMemoryWorkerStore`] does.
    async fn place(
        &self,
        id: WorkerId,
        x: i32,
        y: i32,
    ) -> Result<Option<LocationUpdate>, StoreError> {
        if self.is_occupied(x, y, Some(id)).await? {
            return Ok(None);
        }
        let (worker, update) = match self.find_by_id(id).await? {
            Some(existing) => (Worker { x, y, ..existing }, LocationUpdate::Updated),
            None => (Worker::new(id, x, y), LocationUpdate::Created),
        };
        self.upsert(worker).await?;
        Ok(Some(update))
    }
}
