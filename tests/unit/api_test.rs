//! Tests for API request/response models

use pickup_dispatch::core::{AdmissionController, DispatchError, LocationUpdate};
use pickup_dispatch::runtime::{
    CreateOrderRequest, ErrorResponse, MessageResponse, ServiceStatus, StatusResponse,
    UpdateWorkerRequest,
};

#[test]
fn test_requests_deserialize() {
    let order: CreateOrderRequest = serde_json::from_str(r#"{"x": 4, "y": 9}"#).unwrap();
    assert_eq!(order, CreateOrderRequest { x: 4, y: 9 });
    let update: UpdateWorkerRequest =
        serde_json::from_str(r#"{"id": 12, "x": 0, "y": 1}"#).unwrap();
    assert_eq!(update.id, 12);
}

#[test]
fn test_status_response_shape() {
    let gate = AdmissionController::new(3);
    let _held = gate.try_acquire().unwrap();
    let json = serde_json::to_value(StatusResponse::from_admission(&gate)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "currentRequests": 1, "limit": 3, "status": "Available" })
    );
}

#[test]
fn test_busy_status() {
    let gate = AdmissionController::new(1);
    let _held = gate.try_acquire().unwrap();
    assert_eq!(
        StatusResponse::from_admission(&gate).status,
        ServiceStatus::Busy
    );
}

#[test]
fn test_rejection_body_carries_counts() {
    let body = ErrorResponse::from(&DispatchError::AdmissionRejected {
        in_flight: 2,
        limit: 2,
    });
    let json = serde_json::to_value(body).unwrap();
    assert_eq!(json["currentRequests"], 2);
    assert_eq!(json["limit"], 2);
}

#[test]
fn test_business_error_body_has_only_message() {
    let json = serde_json::to_value(ErrorResponse::from(&DispatchError::NoWorkersAvailable))
        .unwrap();
    assert_eq!(json, serde_json::json!({ "error": "no available workers" }));
}

#[test]
fn test_location_messages() {
    assert_eq!(
        MessageResponse::from(LocationUpdate::Created).message,
        "coordinates added"
    );
    assert_eq!(
        MessageResponse::from(LocationUpdate::Updated).message,
        "coordinates updated"
    );
}
