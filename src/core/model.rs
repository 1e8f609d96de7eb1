//! Dispatch data model: workers, points and outcomes.

use serde::{Deserialize, Serialize};

/// Worker identifier, unique within a store.
pub type WorkerId = i64;

/// Integer lattice point on the dispatch map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Exact squared Euclidean distance to `other`.
    #[must_use]
    pub const fn distance_sq(self, other: Self) -> u128 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs() as u128;
        let dy = (self.y as i64 - other.y as i64).unsigned_abs() as u128;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn distance(self, other: Self) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }

    /// Chebyshev (chessboard) distance to `other`.
    #[must_use]
    pub const fn chebyshev(self, other: Self) -> u64 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        if dx > dy {
            dx
        } else {
            dy
        }
    }
}

/// Worker snapshot as read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier.
    pub id: WorkerId,
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
    /// Whether the worker can take a new pickup.
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

impl Worker {
    /// Create an available worker at `(x, y)`.
    #[must_use]
    pub const fn new(id: WorkerId, x: i32, y: i32) -> Self {
        Self {
            id,
            x,
            y,
            available: true,
        }
    }

    /// Same worker with availability set.
    #[must_use]
    pub const fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Successful dispatch: the chosen worker and its route to the pickup point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// Chosen worker.
    pub worker_id: WorkerId,
    /// Chosen worker's horizontal position.
    pub worker_x: i32,
    /// Chosen worker's vertical position.
    pub worker_y: i32,
    /// Euclidean distance from the worker to the target.
    pub route_length: f64,
    /// Lattice path from the worker to the target, both ends included.
    pub route: Vec<Point>,
}

/// Result of a location update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationUpdate {
    /// The worker was unknown and has been registered.
    Created,
    /// An existing worker moved.
    Updated,
}
