//! Expanding-window ranker.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::core::{Point, Worker};

use super::{Candidate, Ranker};

/// Grows a square window (Chebyshev radius) around the target and emits candidates
/// as soon as no uncovered worker can precede them.
///
/// Every worker outside a window of radius `r` is strictly farther than `r`, so a
/// covered candidate whose squared distance is at most `r²` is final. Covered
/// candidates beyond that wait in a min-heap until the window catches up.
///
/// The window grows over occupied rings only: every worker is bucketed by its ring
/// up front, in O(n log n), and radii with no workers are never visited. The cost
/// therefore depends on how many workers there are, not on how far they sit from
/// the target or how the map is laid out.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandingWindow;

impl Ranker for ExpandingWindow {
    fn name(&self) -> &'static str {
        "Expanding Window"
    }

    fn select(&self, workers: &[Worker], target: Point, k: usize) -> Vec<Worker> {
        if k == 0 || workers.is_empty() {
            return Vec::new();
        }
        let k = k.min(workers.len());

        let mut rings: BTreeMap<u64, Vec<Candidate<'_>>> = BTreeMap::new();
        for worker in workers {
            rings
                .entry(worker.position().chebyshev(target))
                .or_default()
                .push(Candidate::new(worker, target));
        }

        let mut pending = BinaryHeap::new();
        let mut ranked = Vec::with_capacity(k);
        for (radius, ring) in rings {
            pending.extend(ring.into_iter().map(Reverse));
            let reach = u128::from(radius) * u128::from(radius);
            while ranked.len() < k {
                let settled = pending
                    .peek()
                    .is_some_and(|top: &Reverse<Candidate<'_>>| top.0.key.distance_sq <= reach);
                if !settled {
                    break;
                }
                if let Some(Reverse(c)) = pending.pop() {
                    ranked.push(c.worker.clone());
                }
            }
            if ranked.len() == k {
                return ranked;
            }
        }

        // Window covers every worker; the rest is already in order.
        while ranked.len() < k {
            let Some(Reverse(c)) = pending.pop() else {
                break;
            };
            ranked.push(c.worker.clone());
        }
        ranked
    }
}
