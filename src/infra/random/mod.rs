//! Random-number sources used to spread dispatches among near-ties.
//!
//! A remote provider is best-effort. [`FallbackRandom`] composes it with a local
//! generator so callers always get a number in range.

pub mod fallback;
pub mod http;
pub mod local;

use async_trait::async_trait;
use thiserror::Error;

pub use fallback::FallbackRandom;
pub use http::HttpRandom;
pub use local::LocalRandom;

/// Errors produced by random-number sources.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The requested range is empty.
    #[error("invalid range [{min}, {max}]")]
    InvalidRange {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
    /// Request to the provider failed (connect, timeout, body read).
    #[error("random provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Provider answered with a non-success status.
    #[error("random provider returned status {0}")]
    Status(u16),
    /// Provider payload could not be understood.
    #[error("random provider returned malformed payload: {0}")]
    Malformed(String),
    /// Provider returned a number outside the requested range.
    #[error("random value {value} outside [{min}, {max}]")]
    OutOfRange {
        /// Value received.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

/// Source of uniformly distributed integers.
#[async_trait]
pub trait RandomSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Uniform integer in the inclusive range `[min, max]`.
    async fn next_in_range(&self, min: i64, max: i64) -> Result<i64, RandomError>;
}

/// Reject values outside `[min, max]`.
pub(crate) fn check_range(value: i64, min: i64, max: i64) -> Result<i64, RandomError> {
    if value < min || value > max {
        return Err(RandomError::OutOfRange { value, min, max });
    }
    Ok(value)
}
