//! API-facing request/response models.

use serde::{Deserialize, Serialize};

use crate::core::{AdmissionController, DispatchError, DispatchOutcome, LocationUpdate, Point};

/// Order submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Pickup x.
    pub x: i32,
    /// Pickup y.
    pub y: i32,
}

impl From<CreateOrderRequest> for Point {
    fn from(req: CreateOrderRequest) -> Self {
        Self::new(req.x, req.y)
    }
}

/// Worker location update payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWorkerRequest {
    /// Worker identifier.
    pub id: i64,
    /// New x.
    pub x: i32,
    /// New y.
    pub y: i32,
}

/// Dispatched order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Chosen worker.
    pub driver_id: i64,
    /// Worker x.
    pub driver_x: i32,
    /// Worker y.
    pub driver_y: i32,
    /// Euclidean distance to the pickup.
    pub route_length: f64,
    /// Lattice path to the pickup.
    pub route: Vec<Point>,
}

impl From<DispatchOutcome> for OrderResponse {
    fn from(outcome: DispatchOutcome) -> Self {
        Self {
            driver_id: outcome.worker_id,
            driver_x: outcome.worker_x,
            driver_y: outcome.worker_y,
            route_length: outcome.route_length,
            route: outcome.route,
        }
    }
}

/// Plain confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl From<LocationUpdate> for MessageResponse {
    fn from(update: LocationUpdate) -> Self {
        let message = match update {
            LocationUpdate::Created => "coordinates added",
            LocationUpdate::Updated => "coordinates updated",
        };
        Self {
            message: message.to_string(),
        }
    }
}

/// Coarse load indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// Below the parallel limit.
    Available,
    /// Every slot taken.
    Busy,
}

/// Admission snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Dispatches in flight.
    pub current_requests: u32,
    /// Parallel limit.
    pub limit: u32,
    /// Derived load indicator.
    pub status: ServiceStatus,
}

impl StatusResponse {
    /// Snapshot the admission gate.
    #[must_use]
    pub fn from_admission(admission: &AdmissionController) -> Self {
        let current_requests = admission.in_flight();
        let limit = admission.limit();
        Self {
            current_requests,
            limit,
            status: if current_requests < limit {
                ServiceStatus::Available
            } else {
                ServiceStatus::Busy
            },
        }
    }
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable error.
    pub error: String,
    /// In-flight count, set on admission rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_requests: Option<u32>,
    /// Parallel limit, set on admission rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ErrorResponse {
    /// Body carrying only a message.
    #[must_use]
    pub const fn message(error: String) -> Self {
        Self {
            error,
            current_requests: None,
            limit: None,
        }
    }
}

impl From<&DispatchError> for ErrorResponse {
    fn from(err: &DispatchError) -> Self {
        match err {
            DispatchError::AdmissionRejected { in_flight, limit } => Self {
                error: "service is busy, try again later".to_string(),
                current_requests: Some(*in_flight),
                limit: Some(*limit),
            },
            DispatchError::Store(_) | DispatchError::Internal(_) => {
                Self::message("internal server error".to_string())
            }
            other => Self::message(other.to_string()),
        }
    }
}
