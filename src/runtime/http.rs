//! axum router exposing the dispatch service.

use std::future::Future;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tokio::net::TcpListener;
use tracing::Instrument;
use uuid::Uuid;

use crate::core::{DispatchError, DispatchService, Point};
use crate::runtime::api::{
    CreateOrderRequest, ErrorResponse, MessageResponse, OrderResponse, StatusResponse,
    UpdateWorkerRequest,
};

/// Errors returned by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The dispatch workflow failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// The request body was missing, not JSON, or had the wrong shape.
    #[error("invalid request body: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    /// Status code for the error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_)
            | Self::Dispatch(
                DispatchError::OutOfBounds { .. }
                | DispatchError::LocationOccupied { .. }
                | DispatchError::NoWorkersAvailable,
            ) => StatusCode::BAD_REQUEST,
            Self::Dispatch(DispatchError::AdmissionRejected { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Dispatch(DispatchError::Cancelled) => StatusCode::REQUEST_TIMEOUT,
            Self::Dispatch(DispatchError::Store(_) | DispatchError::Internal(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Dispatch(err) => {
                if matches!(err, DispatchError::Store(_) | DispatchError::Internal(_)) {
                    tracing::error!(error = %err, "request failed");
                }
                ErrorResponse::from(err)
            }
            Self::BadRequest(_) => {
                tracing::debug!(error = %self, "rejected request body");
                ErrorResponse::message(self.to_string())
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Build the API router.
pub fn router(service: DispatchService) -> Router {
    Router::new()
        .route("/api/orders", post(create_order))
        .route("/api/drivers/coordinates", put(update_coordinates))
        .route("/api/status", get(status))
        .with_state(service)
}

/// Serve `router(service)` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// I/O failure from the listener.
pub async fn serve<S>(
    listener: TcpListener,
    service: DispatchService,
    shutdown: S,
) -> std::io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "dispatch api listening");
    }
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn create_order(
    State(service): State<DispatchService>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, ApiError> {
    let Json(req) = payload?;
    let span = tracing::info_span!("create_order", request_id = %Uuid::new_v4(), x = req.x, y = req.y);
    async move {
        let outcome = service.create_order(Point::from(req)).await?;
        Ok(Json(OrderResponse::from(outcome)))
    }
    .instrument(span)
    .await
}

async fn update_coordinates(
    State(service): State<DispatchService>,
    payload: Result<Json<UpdateWorkerRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload?;
    let span = tracing::info_span!(
        "update_coordinates",
        request_id = %Uuid::new_v4(),
        worker_id = req.id,
        x = req.x,
        y = req.y
    );
    async move {
        let update = service
            .update_location(req.id, Point::new(req.x, req.y))
            .await?;
        Ok(Json(MessageResponse::from(update)))
    }
    .instrument(span)
    .await
}

async fn status(State(service): State<DispatchService>) -> Json<StatusResponse> {
    Json(StatusResponse::from_admission(service.admission()))
}
