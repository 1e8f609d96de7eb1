//! Non-blocking admission control for dispatch workflows.
//!
//! The controller is a counting gate: an attempt either takes a slot right away or is
//! rejected right away. Nothing ever waits for capacity. A slot is represented by an
//! [`AdmissionPermit`] which hands the slot back when dropped, so the release runs once on
//! every exit path of the guarded section, including unwinding and a dropped future.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Why an admission attempt did not get a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdmissionDenied {
    /// Every slot was taken when the attempt was made.
    #[error("{in_flight}/{limit} dispatches in flight")]
    Saturated {
        /// In-flight count observed by the failed attempt.
        in_flight: u32,
        /// Configured limit.
        limit: u32,
    },
    /// The caller was cancelled before or during the attempt.
    #[error("caller cancelled")]
    Cancelled,
}

/// Process-wide gate bounding how many dispatches run at once.
///
/// Uses a lock-free `AtomicU32` with a CAS loop for the compare-and-increment.
#[derive(Debug, Clone)]
pub struct AdmissionController {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    limit: u32,
    in_flight: AtomicU32,
}

impl AdmissionController {
    /// Create a controller with a fixed limit.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero; configuration validation rejects that earlier.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        assert!(limit >= 1, "admission limit must be at least 1");
        Self {
            inner: Arc::new(Inner {
                limit,
                in_flight: AtomicU32::new(0),
            }),
        }
    }

    /// Try to take a slot without waiting.
    ///
    /// # Errors
    ///
    /// [`AdmissionDenied::Saturated`] carrying the count this attempt saw when `limit`
    /// dispatches are already in flight.
    pub fn try_acquire(&self) -> Result<AdmissionPermit, AdmissionDenied> {
        let mut current = self.inner.in_flight.load(Ordering::Acquire);
        loop {
            if current >= self.inner.limit {
                tracing::warn!(
                    in_flight = current,
                    limit = self.inner.limit,
                    "admission rejected: parallel limit reached"
                );
                return Err(AdmissionDenied::Saturated {
                    in_flight: current,
                    limit: self.inner.limit,
                });
            }
            match self.inner.in_flight.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    tracing::debug!(
                        in_flight = current + 1,
                        limit = self.inner.limit,
                        "admission granted"
                    );
                    return Ok(AdmissionPermit {
                        inner: Arc::clone(&self.inner),
                    });
                }
                Err(actual) => current = actual,
            }
        }
    }

    /// Like [`try_acquire`](Self::try_acquire), but never succeeds for a cancelled caller.
    ///
    /// A slot won while the token flips to cancelled is handed straight back.
    ///
    /// # Errors
    ///
    /// [`AdmissionDenied::Cancelled`] for a cancelled caller, otherwise as
    /// [`try_acquire`](Self::try_acquire).
    pub fn try_acquire_cancellable(
        &self,
        token: &CancellationToken,
    ) -> Result<AdmissionPermit, AdmissionDenied> {
        if token.is_cancelled() {
            tracing::debug!("admission skipped: caller already cancelled");
            return Err(AdmissionDenied::Cancelled);
        }
        let permit = self.try_acquire()?;
        if token.is_cancelled() {
            drop(permit);
            tracing::debug!("admission rolled back: caller cancelled during acquire");
            return Err(AdmissionDenied::Cancelled);
        }
        Ok(permit)
    }

    /// Run `work` while holding a slot.
    ///
    /// `work` is not polled at all when rejected. The slot is released when `work`
    /// finishes, panics, or when the returned future is dropped mid-flight.
    ///
    /// # Errors
    ///
    /// As [`try_acquire`](Self::try_acquire).
    pub async fn run<F>(&self, work: F) -> Result<F::Output, AdmissionDenied>
    where
        F: Future,
    {
        let _permit = self.try_acquire()?;
        Ok(work.await)
    }

    /// Dispatches currently holding a slot.
    #[must_use]
    pub fn in_flight(&self) -> u32 {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    /// Configured limit.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.inner.limit
    }
}

/// A held admission slot, released on drop.
#[derive(Debug)]
#[must_use = "dropping the permit releases the slot immediately"]
pub struct AdmissionPermit {
    inner: Arc<Inner>,
}

impl Drop for AdmissionPermit {
    fn drop(&mut self) {
        let previous = self.inner.in_flight.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "admission slot released twice");
        tracing::debug!(
            in_flight = previous.saturating_sub(1),
            limit = self.inner.limit,
            "admission released"
        );
    }
}
