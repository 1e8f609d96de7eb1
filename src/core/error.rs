//! Error types for dispatch operations.

use thiserror::Error;

use crate::core::AdmissionDenied;
use crate::infra::store::StoreError;

/// Errors produced by the dispatch workflow.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Target lies outside the configured map.
    #[error("coordinates ({x}, {y}) are outside the {width}x{height} map")]
    OutOfBounds {
        /// Requested horizontal coordinate.
        x: i32,
        /// Requested vertical coordinate.
        y: i32,
        /// Map width.
        width: i32,
        /// Map height.
        height: i32,
    },
    /// Another available worker already stands on the requested cell.
    #[error("coordinates ({x}, {y}) are occupied by another worker")]
    LocationOccupied {
        /// Requested horizontal coordinate.
        x: i32,
        /// Requested vertical coordinate.
        y: i32,
    },
    /// No available worker could be matched.
    #[error("no available workers")]
    NoWorkersAvailable,
    /// The admission controller is at capacity.
    #[error("service is busy: {in_flight}/{limit} dispatches in flight")]
    AdmissionRejected {
        /// Dispatches in flight when the attempt was made.
        in_flight: u32,
        /// Configured limit.
        limit: u32,
    },
    /// The caller went away before the dispatch completed.
    #[error("request cancelled")]
    Cancelled,
    /// The worker store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Internal invariant violation.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AdmissionDenied> for DispatchError {
    fn from(denied: AdmissionDenied) -> Self {
        match denied {
            AdmissionDenied::Saturated { in_flight, limit } => {
                Self::AdmissionRejected { in_flight, limit }
            }
            AdmissionDenied::Cancelled => Self::Cancelled,
        }
    }
}

impl DispatchError {
    /// Business failures are expected outcomes the caller can act on; everything
    /// else is a fault.
    #[must_use]
    pub const fn is_business(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. } | Self::LocationOccupied { .. } | Self::NoWorkersAvailable
        )
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
