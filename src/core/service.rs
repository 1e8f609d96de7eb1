//! Admission-guarded entry point for dispatch operations.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::core::{
    AdmissionController, DispatchCoordinator, DispatchError, DispatchOutcome, LocationUpdate,
    Point, WorkerId,
};

/// Runs coordinator operations only while holding an admission slot.
///
/// Rejections never reach the coordinator. Every admitted call releases its slot
/// exactly once, whatever the outcome, including when the caller drops the future.
#[derive(Debug, Clone)]
pub struct DispatchService {
    admission: AdmissionController,
    coordinator: Arc<DispatchCoordinator>,
}

impl DispatchService {
    /// Combine an admission gate with a coordinator.
    #[must_use]
    pub fn new(admission: AdmissionController, coordinator: DispatchCoordinator) -> Self {
        Self {
            admission,
            coordinator: Arc::new(coordinator),
        }
    }

    /// Admission gate shared by every clone of this service.
    #[must_use]
    pub const fn admission(&self) -> &AdmissionController {
        &self.admission
    }

    /// Dispatch an order for `target`.
    ///
    /// # Errors
    ///
    /// [`DispatchError::AdmissionRejected`] when at capacity, otherwise whatever
    /// [`DispatchCoordinator::create_order`] returns.
    pub async fn create_order(&self, target: Point) -> Result<DispatchOutcome, DispatchError> {
        self.admission
            .run(self.coordinator.create_order(target))
            .await?
    }

    /// Dispatch an order unless `token` is cancelled first.
    ///
    /// A cancelled caller never takes a slot; a cancellation while the workflow runs
    /// abandons it and releases the slot.
    ///
    /// # Errors
    ///
    /// [`DispatchError::Cancelled`] on cancellation, otherwise as
    /// [`create_order`](Self::create_order).
    pub async fn create_order_cancellable(
        &self,
        target: Point,
        token: &CancellationToken,
    ) -> Result<DispatchOutcome, DispatchError> {
        let _permit = self.admission.try_acquire_cancellable(token)?;
        tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::info!(x = target.x, y = target.y, "dispatch cancelled by caller");
                Err(DispatchError::Cancelled)
            }
            result = self.coordinator.create_order(target) => result,
        }
    }

    /// Register or move a worker.
    ///
    /// # Errors
    ///
    /// [`DispatchError::AdmissionRejected`] when at capacity, otherwise whatever
    /// [`DispatchCoordinator::update_location`] returns.
    pub async fn update_location(
        &self,
        id: WorkerId,
        position: Point,
    ) -> Result<LocationUpdate, DispatchError> {
        self.admission
            .run(self.coordinator.update_location(id, position))
            .await?
    }
}
