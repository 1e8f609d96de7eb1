//! Infrastructure adapters for the worker store and random-number sources.

pub mod random;
pub mod store;
