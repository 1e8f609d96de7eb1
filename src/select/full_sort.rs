//! Reference ranker: sort everything, keep the head.

use crate::core::{Point, Worker};

use super::{candidates, into_workers, Ranker};

/// Sorts every candidate by `(distance, id)` and truncates to `k`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullSort;

impl Ranker for FullSort {
    fn name(&self) -> &'static str {
        "Full Sort"
    }

    fn select(&self, workers: &[Worker], target: Point, k: usize) -> Vec<Worker> {
        if k == 0 || workers.is_empty() {
            return Vec::new();
        }
        let mut ranked = candidates(workers, target);
        ranked.sort_unstable();
        ranked.truncate(k);
        into_workers(ranked)
    }
}
