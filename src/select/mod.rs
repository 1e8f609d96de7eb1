//! Nearest-worker selection.
//!
//! Every ranker returns the `k` workers closest to a target ordered by the total order
//! `(distance, id)`: ascending distance, ties broken by ascending worker id. Distances are
//! compared as exact squared integers, so two rankers can never disagree because of
//! floating-point rounding. The strategies differ only in cost:
//!
//! | Ranker | Cost | Notes |
//! |---|---|---|
//! | [`FullSort`] | O(n log n) | reference ordering |
//! | [`BoundedHeap`] | O(n log k) | max-heap of the best `k` seen so far |
//! | [`PartitionSelect`] | O(n) expected | quickselect, then sorts only the first `k` |
//! | [`ExpandingWindow`] | depends on locality | grows a square window around the target |

pub mod bounded_heap;
pub mod full_sort;
pub mod partition;
pub mod window;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{Point, Worker, WorkerId};

pub use bounded_heap::BoundedHeap;
pub use full_sort::FullSort;
pub use partition::PartitionSelect;
pub use window::ExpandingWindow;

/// Sort key implementing the `(distance, id)` total order.
///
/// Field order matters: the derived `Ord` compares `distance_sq` first, then `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankKey {
    /// Exact squared Euclidean distance to the target.
    pub distance_sq: u128,
    /// Worker id, the tie-breaker.
    pub id: WorkerId,
}

/// A worker paired with its key for one selection call.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Ranking key.
    pub key: RankKey,
    /// Worker snapshot being ranked.
    pub worker: &'a Worker,
}

impl<'a> Candidate<'a> {
    /// Compute the key of `worker` relative to `target`.
    #[must_use]
    pub const fn new(worker: &'a Worker, target: Point) -> Self {
        Self {
            key: RankKey {
                distance_sq: worker.position().distance_sq(target),
                id: worker.id,
            },
            worker,
        }
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Build the candidate list for a selection call.
pub(crate) fn candidates(workers: &[Worker], target: Point) -> Vec<Candidate<'_>> {
    workers.iter().map(|w| Candidate::new(w, target)).collect()
}

/// Clone the workers out of ranked candidates.
pub(crate) fn into_workers<'a>(ranked: impl IntoIterator<Item = Candidate<'a>>) -> Vec<Worker> {
    ranked.into_iter().map(|c| c.worker.clone()).collect()
}

/// Strategy that ranks workers by the `(distance, id)` total order.
///
/// Implementations are pure: no shared state, safe to call concurrently.
pub trait Ranker: Send + Sync {
    /// Human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Return at most `k` workers nearest to `target`, sorted by `(distance, id)`.
    ///
    /// `k == 0` or an empty slice yields an empty result. Worker ids are expected
    /// to be unique, as the store guarantees.
    fn select(&self, workers: &[Worker], target: Point, k: usize) -> Vec<Worker>;
}

/// Configurable choice of ranker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankerKind {
    /// [`FullSort`].
    #[default]
    FullSort,
    /// [`BoundedHeap`].
    BoundedHeap,
    /// [`PartitionSelect`].
    PartitionSelect,
    /// [`ExpandingWindow`].
    ExpandingWindow,
}

impl RankerKind {
    /// Every ranker, reference first.
    pub const ALL: [Self; 4] = [
        Self::FullSort,
        Self::BoundedHeap,
        Self::PartitionSelect,
        Self::ExpandingWindow,
    ];

    /// Instantiate the ranker.
    #[must_use]
    pub fn build(self) -> Arc<dyn Ranker> {
        match self {
            Self::FullSort => Arc::new(FullSort),
            Self::BoundedHeap => Arc::new(BoundedHeap),
            Self::PartitionSelect => Arc::new(PartitionSelect),
            Self::ExpandingWindow => Arc::new(ExpandingWindow),
        }
    }

    /// Parse the snake-case name used in configuration.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "full_sort" => Some(Self::FullSort),
            "bounded_heap" => Some(Self::BoundedHeap),
            "partition_select" => Some(Self::PartitionSelect),
            "expanding_window" => Some(Self::ExpandingWindow),
            _ => None,
        }
    }
}

impl fmt::Display for RankerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FullSort => "full_sort",
            Self::BoundedHeap => "bounded_heap",
            Self::PartitionSelect => "partition_select",
            Self::ExpandingWindow => "expanding_window",
        };
        f.write_str(name)
    }
}

/// Selection engine over a configured ranker.
#[derive(Clone)]
pub struct SelectionEngine {
    ranker: Arc<dyn Ranker>,
}

impl SelectionEngine {
    /// Engine backed by the given ranker kind.
    #[must_use]
    pub fn new(kind: RankerKind) -> Self {
        Self {
            ranker: kind.build(),
        }
    }

    /// Name of the active ranker.
    #[must_use]
    pub fn ranker_name(&self) -> &'static str {
        self.ranker.name()
    }

    /// Top `k` workers nearest to `target`.
    #[must_use]
    pub fn select(&self, workers: &[Worker], target: Point, k: usize) -> Vec<Worker> {
        let ranked = self.ranker.select(workers, target, k);
        tracing::debug!(
            ranker = self.ranker.name(),
            candidates = workers.len(),
            k,
            returned = ranked.len(),
            "ranked candidates"
        );
        ranked
    }
}

impl fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("ranker", &self.ranker.name())
            .finish()
    }
}
