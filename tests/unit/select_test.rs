//! Tests for the selection engine and its rankers

use pickup_dispatch::core::{Point, Worker};
use pickup_dispatch::select::{RankerKind, SelectionEngine};

fn workers() -> Vec<Worker> {
    vec![
        Worker::new(1, 0, 0),
        Worker::new(2, 3, 4),
        Worker::new(3, 1, 1),
        Worker::new(4, 5, 5),
        Worker::new(5, 2, 2),
        Worker::new(6, 10, 10),
        Worker::new(7, 1, 0),
        Worker::new(8, 0, 1),
        Worker::new(9, 4, 3),
        Worker::new(10, 2, 3),
    ]
}

fn ids(workers: &[Worker]) -> Vec<i64> {
    workers.iter().map(|w| w.id).collect()
}

#[test]
fn test_four_nearest_to_origin() {
    for kind in RankerKind::ALL {
        let engine = SelectionEngine::new(kind);
        assert_eq!(
            ids(&engine.select(&workers(), Point::new(0, 0), 4)),
            vec![1, 7, 8, 3],
            "{kind}"
        );
    }
}

#[test]
fn test_six_nearest_to_center() {
    for kind in RankerKind::ALL {
        let ranker = kind.build();
        assert_eq!(
            ids(&ranker.select(&workers(), Point::new(2, 2), 6)),
            vec![5, 10, 3, 2, 7, 8],
            "{}",
            ranker.name()
        );
    }
}

#[test]
fn test_k_zero_is_empty() {
    for kind in RankerKind::ALL {
        assert!(kind.build().select(&workers(), Point::new(0, 0), 0).is_empty());
    }
}

#[test]
fn test_k_above_len_returns_everyone_sorted() {
    for kind in RankerKind::ALL {
        assert_eq!(
            ids(&kind.build().select(&workers(), Point::new(5, 5), 50)),
            vec![4, 2, 9, 10, 5, 3, 7, 8, 1, 6],
            "{kind}"
        );
    }
}

#[test]
fn test_empty_input() {
    for kind in RankerKind::ALL {
        assert!(kind.build().select(&[], Point::new(3, 3), 5).is_empty());
    }
}

#[test]
fn test_equal_distance_breaks_by_id() {
    let stacked = vec![
        Worker::new(30, 2, 2),
        Worker::new(10, 2, 2),
        Worker::new(20, 2, 2),
        Worker::new(5, 4, 4),
    ];
    for kind in RankerKind::ALL {
        assert_eq!(
            ids(&kind.build().select(&stacked, Point::new(2, 2), 2)),
            vec![10, 20],
            "{kind}"
        );
    }
}

#[test]
fn test_unavailable_flag_is_not_a_ranking_concern() {
    let mixed = vec![Worker::new(1, 9, 9), Worker::new(2, 0, 0).with_available(false)];
    let engine = SelectionEngine::new(RankerKind::FullSort);
    assert_eq!(ids(&engine.select(&mixed, Point::new(0, 0), 1)), vec![2]);
}

#[test]
fn test_ranker_kind_names() {
    let names: Vec<&str> = RankerKind::ALL.iter().map(|k| k.build().name()).collect();
    assert_eq!(
        names,
        vec!["Full Sort", "Bounded Heap", "Partition Select", "Expanding Window"]
    );
    assert_eq!(RankerKind::default(), RankerKind::FullSort);
}
