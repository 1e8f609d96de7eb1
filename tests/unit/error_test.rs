//! Tests for error types

use pickup_dispatch::core::DispatchError;
use pickup_dispatch::infra::random::RandomError;
use pickup_dispatch::infra::store::StoreError;

#[test]
fn test_out_of_bounds_error() {
    let err = DispatchError::OutOfBounds {
        x: -1,
        y: 4,
        width: 100,
        height: 100,
    };
    assert_eq!(
        format!("{err}"),
        "coordinates (-1, 4) are outside the 100x100 map"
    );
    assert!(err.is_business());
}

#[test]
fn test_no_workers_error() {
    let err = DispatchError::NoWorkersAvailable;
    assert_eq!(format!("{err}"), "no available workers");
}

#[test]
fn test_admission_rejected_error() {
    let err = DispatchError::AdmissionRejected {
        in_flight: 10,
        limit: 10,
    };
    assert_eq!(
        format!("{err}"),
        "service is busy: 10/10 dispatches in flight"
    );
    assert!(!err.is_business());
}

#[test]
fn test_store_error_is_transparent() {
    let err = DispatchError::from(StoreError::Unavailable("connection refused".into()));
    assert_eq!(
        format!("{err}"),
        "worker store unavailable: connection refused"
    );
    assert!(matches!(err, DispatchError::Store(StoreError::Unavailable(_))));
}

#[test]
fn test_random_out_of_range_error() {
    let err = RandomError::OutOfRange {
        value: 12,
        min: 0,
        max: 9,
    };
    assert_eq!(format!("{err}"), "random value 12 outside [0, 9]");
}
