//! # Pickup Dispatch
//!
//! Assigns an incoming pickup request to one of the nearest available workers while
//! protecting the service from overload.
//!
//! ## Core Problem Solved
//!
//! A dispatch service sits between a burst of pickup requests and a pool of workers whose
//! positions change all the time. It has to:
//!
//! - **Rank quickly**: find the `k` nearest available workers to a target point
//! - **Rank identically**: every ranking strategy yields the exact same ordered result
//! - **Shed load**: reject work immediately once the configured number of dispatches is in flight
//! - **Spread work**: pick uniformly among near-ties instead of always the single nearest worker
//!
//! ## Key Features
//!
//! - **Interchangeable rankers**: full sort, bounded heap, quickselect and expanding window,
//!   all ordered by the `(distance, id)` total order
//! - **Admission control**: lock-free CAS counter with RAII permits that release on every exit path
//! - **Fair pick**: remote random-number provider with a local fallback composed as one source
//! - **Routing**: integer Bresenham path from the chosen worker to the pickup point
//!
//! ## Dispatching an order
//!
//! ```rust,ignore
//! use pickup_dispatch::builders::build_service;
//! use pickup_dispatch::config::DispatchConfig;
//! use pickup_dispatch::core::Point;
//! use pickup_dispatch::infra::store::InMemoryWorkerStore;
//! use std::sync::Arc;
//!
//! let cfg = DispatchConfig::from_env()?;
//! let store = Arc::new(InMemoryWorkerStore::from_workers(cfg.seed_workers.clone()));
//! let service = build_service(&cfg, store)?;
//!
//! match service.create_order(Point::new(12, 7)).await {
//!     Ok(outcome) => println!("worker {} is {:.2} away", outcome.worker_id, outcome.route_length),
//!     Err(e) if e.is_business() => println!("rejected: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Ranking without the service
//!
//! ```rust
//! use pickup_dispatch::core::{Point, Worker};
//! use pickup_dispatch::select::{RankerKind, SelectionEngine};
//!
//! let workers = vec![Worker::new(2, 3, 4), Worker::new(1, 0, 0), Worker::new(7, 1, 0)];
//! let engine = SelectionEngine::new(RankerKind::PartitionSelect);
//! let ids: Vec<i64> = engine
//!     .select(&workers, Point::new(0, 0), 2)
//!     .iter()
//!     .map(|w| w.id)
//!     .collect();
//! assert_eq!(ids, vec![1, 7]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Dispatch domain: models, errors, admission control, routing and the coordinator.
pub mod core;
/// Configuration models loaded once at startup.
pub mod config;
/// Builders that wire a dispatch service from configuration.
pub mod builders;
/// Infrastructure adapters for the worker store and random-number sources.
pub mod infra;
/// Nearest-worker selection engine and its ranking strategies.
pub mod select;
/// HTTP surface and API request/response models.
pub mod runtime;
/// Shared utilities.
pub mod util;
