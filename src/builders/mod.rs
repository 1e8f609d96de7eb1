//! Builders to construct dispatch components from configuration.

pub mod service_builder;

pub use service_builder::{build_random_source, build_service};
