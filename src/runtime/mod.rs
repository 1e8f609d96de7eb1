//! HTTP surface and API request/response models.

pub mod api;
pub mod http;

pub use api::{
    CreateOrderRequest, ErrorResponse, MessageResponse, OrderResponse, ServiceStatus,
    StatusResponse, UpdateWorkerRequest,
};
pub use http::{router, serve, ApiError};
