//! Dispatch workflow: validate, fetch, rank, pick, route.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::route::route;
use crate::core::{
    DispatchError, DispatchOutcome, LocationUpdate, Point, RandomPicker, Worker, WorkerId,
};
use crate::infra::store::WorkerStore;
use crate::select::SelectionEngine;

/// Default number of nearest workers considered for the random pick.
pub const DEFAULT_TOP_N: usize = 10;

/// Valid map area: `0 <= x < width`, `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBounds {
    /// Exclusive upper bound for x.
    pub width: i32,
    /// Exclusive upper bound for y.
    pub height: i32,
}

impl MapBounds {
    /// Create bounds.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `point` lies on the map.
    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// `Ok` if `point` lies on the map, `OutOfBounds` otherwise.
    ///
    /// # Errors
    ///
    /// [`DispatchError::OutOfBounds`] when the point is off the map.
    pub fn check(self, point: Point) -> Result<(), DispatchError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(DispatchError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Orchestrates one dispatch. Callers hold an admission permit for the whole call;
/// [`DispatchService`](crate::core::DispatchService) takes care of that.
pub struct DispatchCoordinator {
    store: Arc<dyn WorkerStore>,
    engine: SelectionEngine,
    picker: RandomPicker,
    bounds: MapBounds,
    top_n: usize,
}

impl DispatchCoordinator {
    /// Assemble a coordinator from its collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn WorkerStore>,
        engine: SelectionEngine,
        picker: RandomPicker,
        bounds: MapBounds,
        top_n: usize,
    ) -> Self {
        Self {
            store,
            engine,
            picker,
            bounds,
            top_n,
        }
    }

    /// Match `target` with one of the nearest available workers and plot its route.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::OutOfBounds`] if `target` is off the map
    /// - [`DispatchError::NoWorkersAvailable`] if nobody can be matched
    /// - [`DispatchError::Store`] if the store fails
    /// - [`DispatchError::Internal`] if the random pick cannot produce an index
    pub async fn create_order(&self, target: Point) -> Result<DispatchOutcome, DispatchError> {
        self.bounds.check(target)?;

        let available = self.store.list_available().await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to list available workers");
        })?;
        if available.is_empty() {
            tracing::info!(x = target.x, y = target.y, "no available workers");
            return Err(DispatchError::NoWorkersAvailable);
        }

        let nearest = self.engine.select(&available, target, self.top_n);
        if nearest.is_empty() {
            return Err(DispatchError::NoWorkersAvailable);
        }

        let chosen = self
            .picker
            .pick(&nearest)
            .await
            .map_err(|e| DispatchError::Internal(format!("random pick failed: {e}")))?;

        let outcome = Self::outcome(chosen, target);
        tracing::info!(
            worker_id = outcome.worker_id,
            x = target.x,
            y = target.y,
            candidates = nearest.len(),
            route_length = outcome.route_length,
            "order dispatched"
        );
        Ok(outcome)
    }

    /// Register a worker or move an existing one.
    ///
    /// A new worker starts available; an existing worker keeps its availability.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::OutOfBounds`] if the position is off the map
    /// - [`DispatchError::LocationOccupied`] if another available worker is there
    /// - [`DispatchError::Store`] if the store fails
    pub async fn update_location(
        &self,
        id: WorkerId,
        position: Point,
    ) -> Result<LocationUpdate, DispatchError> {
        self.bounds.check(position)?;

        let Some(update) = self.store.place(id, position.x, position.y).await? else {
            tracing::warn!(worker_id = id, x = position.x, y = position.y, "location occupied");
            return Err(DispatchError::LocationOccupied {
                x: position.x,
                y: position.y,
            });
        };

        tracing::info!(worker_id = id, x = position.x, y = position.y, ?update, "worker location saved");
        Ok(update)
    }

    fn outcome(worker: &Worker, target: Point) -> DispatchOutcome {
        let start = worker.position();
        DispatchOutcome {
            worker_id: worker.id,
            worker_x: worker.x,
            worker_y: worker.y,
            route_length: start.distance(target),
            route: route(start, target),
        }
    }
}

impl std::fmt::Debug for DispatchCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchCoordinator")
            .field("engine", &self.engine)
            .field("picker", &self.picker)
            .field("bounds", &self.bounds)
            .field("top_n", &self.top_n)
            .finish_non_exhaustive()
    }
}
