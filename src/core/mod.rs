//! Dispatch domain: models, errors, admission control, routing and the coordinator.

pub mod admission;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod picker;
pub mod route;
pub mod service;

pub use admission::{AdmissionController, AdmissionDenied, AdmissionPermit};
pub use dispatch::{DispatchCoordinator, MapBounds, DEFAULT_TOP_N};
pub use error::{AppResult, DispatchError};
pub use model::{DispatchOutcome, LocationUpdate, Point, Worker, WorkerId};
pub use picker::RandomPicker;
pub use route::route;
pub use service::DispatchService;
