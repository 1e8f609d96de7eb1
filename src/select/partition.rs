//! Quickselect ranker.

use crate::core::{Point, Worker};

use super::{candidates, into_workers, Candidate, Ranker};

/// Partitions candidates until the `k`-th smallest is in place, then sorts only the
/// first `k`.
///
/// Partitioning uses the same `(distance, id)` comparator as every other ranker;
/// comparing distance alone would let ties straddle the cut and change the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionSelect;

impl Ranker for PartitionSelect {
    fn name(&self) -> &'static str {
        "Partition Select"
    }

    fn select(&self, workers: &[Worker], target: Point, k: usize) -> Vec<Worker> {
        if k == 0 || workers.is_empty() {
            return Vec::new();
        }
        let mut items = candidates(workers, target);
        let k = k.min(items.len());
        quickselect(&mut items, k - 1);
        items.truncate(k);
        items.sort_unstable();
        into_workers(items)
    }
}

/// Rearrange `items` so that `items[nth]` holds the element a full sort would put
/// there, with everything before it smaller and everything after it larger.
fn quickselect(items: &mut [Candidate<'_>], nth: usize) {
    let mut left = 0;
    let mut right = items.len() - 1;
    while left < right {
        let pivot = partition(items, left, right);
        match pivot.cmp(&nth) {
            std::cmp::Ordering::Equal => return,
            std::cmp::Ordering::Less => left = pivot + 1,
            std::cmp::Ordering::Greater => right = pivot - 1,
        }
    }
}

/// Lomuto partition of `items[left..=right]` around a median-of-three pivot.
/// Returns the pivot's final index.
fn partition(items: &mut [Candidate<'_>], left: usize, right: usize) -> usize {
    let mid = left + (right - left) / 2;
    let pivot_index = median_of_three(items, left, mid, right);
    items.swap(pivot_index, right);
    let pivot = items[right].key;

    let mut store = left;
    for j in left..right {
        if items[j].key < pivot {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, right);
    store
}

fn median_of_three(items: &[Candidate<'_>], a: usize, b: usize, c: usize) -> usize {
    let (ka, kb, kc) = (items[a].key, items[b].key, items[c].key);
    if (ka <= kb && kb <= kc) || (kc <= kb && kb <= ka) {
        b
    } else if (kb <= ka && ka <= kc) || (kc <= ka && ka <= kb) {
        a
    } else {
        c
    }
}
