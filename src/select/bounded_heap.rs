//! Bounded max-heap ranker.

use std::collections::BinaryHeap;

use crate::core::{Point, Worker};

use super::{into_workers, Candidate, Ranker};

/// Keeps the best `k` candidates in a max-heap, evicting the current worst.
/// This provides O(n log k) selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedHeap;

impl Ranker for BoundedHeap {
    fn name(&self) -> &'static str {
        "Bounded Heap"
    }

    fn select(&self, workers: &[Worker], target: Point, k: usize) -> Vec<Worker> {
        if k == 0 || workers.is_empty() {
            return Vec::new();
        }
        let capacity = k.min(workers.len());
        // Max-heap on (distance, id): the root is the worst of the kept candidates.
        let mut heap = BinaryHeap::with_capacity(capacity + 1);
        for worker in workers {
            let candidate = Candidate::new(worker, target);
            if heap.len() < capacity {
                heap.push(candidate);
            } else if heap.peek().is_some_and(|worst| candidate < *worst) {
                heap.push(candidate);
                heap.pop();
            }
        }
        into_workers(heap.into_sorted_vec())
    }
}
