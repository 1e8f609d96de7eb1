//! Tests for configuration validation

use pickup_dispatch::config::{DispatchConfig, MapConfig};
use pickup_dispatch::core::{Worker, DEFAULT_TOP_N};
use pickup_dispatch::select::RankerKind;

#[test]
fn test_default_config_validation() {
    let cfg = DispatchConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.parallel_limit, 10);
    assert_eq!(cfg.top_n, DEFAULT_TOP_N);
    assert_eq!(cfg.map, MapConfig { width: 100, height: 100 });
}

#[test]
fn test_invalid_parallel_limit() {
    let cfg = DispatchConfig {
        parallel_limit: 0,
        ..DispatchConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_invalid_map_dimensions() {
    let cfg = DispatchConfig {
        map: MapConfig { width: 0, height: 10 },
        ..DispatchConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("0x10"));
}

#[test]
fn test_invalid_top_n() {
    let cfg = DispatchConfig {
        top_n: 0,
        ..DispatchConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_seed_worker_outside_map() {
    let cfg = DispatchConfig {
        map: MapConfig { width: 5, height: 5 },
        seed_workers: vec![Worker::new(1, 1, 1), Worker::new(2, 5, 0)],
        ..DispatchConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.contains("seed worker 2"));
}

#[test]
fn test_disabled_provider_needs_no_url() {
    let mut cfg = DispatchConfig::default();
    cfg.random.enabled = false;
    cfg.random.url.clear();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_from_json_str() {
    let cfg = DispatchConfig::from_json_str(
        r#"{
            "parallel_limit": 4,
            "map": { "width": 50, "height": 20 },
            "ranker": "bounded_heap",
            "random": { "enabled": false },
            "seed_workers": [
                { "id": 1, "x": 0, "y": 0 },
                { "id": 2, "x": 3, "y": 4, "available": false }
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.parallel_limit, 4);
    assert_eq!(cfg.map.height, 20);
    assert_eq!(cfg.ranker, RankerKind::BoundedHeap);
    assert_eq!(cfg.top_n, DEFAULT_TOP_N);
    assert!(!cfg.random.enabled);
    assert!(cfg.seed_workers[0].available);
    assert!(!cfg.seed_workers[1].available);
}

#[test]
fn test_from_json_str_rejects_invalid() {
    let err = DispatchConfig::from_json_str(r#"{ "parallel_limit": 0 }"#).unwrap_err();
    assert!(err.contains("parallel_limit"));
    let err = DispatchConfig::from_json_str("not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_from_missing_file() {
    let err = DispatchConfig::from_file("/definitely/not/here.json").unwrap_err();
    assert!(err.starts_with("cannot read"));
}
