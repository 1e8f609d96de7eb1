//! Admission control under concurrent load.

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use pickup_dispatch::core::{AdmissionController, AdmissionDenied};
use tokio_util::sync::CancellationToken;

#[test]
fn test_limit_two_three_attempts() {
    let gate = AdmissionController::new(2);
    let permits: Vec<_> = (0..3).filter_map(|_| gate.try_acquire().ok()).collect();
    assert_eq!(permits.len(), 2);
    assert_eq!(
        gate.try_acquire().unwrap_err(),
        AdmissionDenied::Saturated {
            in_flight: 2,
            limit: 2
        }
    );
    assert_eq!(gate.in_flight(), 2);
    drop(permits);
    assert_eq!(gate.in_flight(), 0);
}

#[test]
fn test_threads_never_exceed_limit() {
    const LIMIT: u32 = 4;
    const THREADS: usize = 16;

    let gate = AdmissionController::new(LIMIT);
    let active = Arc::new(AtomicU32::new(0));
    let peak = Arc::new(AtomicU32::new(0));
    let admitted = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let gate = gate.clone();
            let active = Arc::clone(&active);
            let peak = Arc::clone(&peak);
            let admitted = Arc::clone(&admitted);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..500 {
                    match gate.try_acquire() {
                        Ok(_permit) => {
                            admitted.fetch_add(1, Ordering::Relaxed);
                            let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                            peak.fetch_max(now, Ordering::SeqCst);
                            thread::yield_now();
                            active.fetch_sub(1, Ordering::SeqCst);
                        }
                        // A rejection always reports a full gate, even if a slot frees
                        // up right after.
                        Err(denied) => assert_eq!(
                            denied,
                            AdmissionDenied::Saturated {
                                in_flight: LIMIT,
                                limit: LIMIT
                            }
                        ),
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(peak.load(Ordering::SeqCst) <= LIMIT);
    assert!(admitted.load(Ordering::Relaxed) > 0);
    assert_eq!(gate.in_flight(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_tasks_never_exceed_limit() {
    const LIMIT: u32 = 3;

    let gate = AdmissionController::new(LIMIT);
    let peak = Arc::new(AtomicU32::new(0));

    let tasks = (0..64).map(|_| {
        let gate = gate.clone();
        let peak = Arc::clone(&peak);
        tokio::spawn(async move {
            let observer = gate.clone();
            gate.run(async move {
                peak.fetch_max(observer.in_flight(), Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(2)).await;
            })
            .await
            .is_ok()
        })
    });
    let results = futures::future::join_all(tasks).await;

    let admitted = results.into_iter().filter(|r| *r.as_ref().unwrap()).count();
    assert!(admitted >= 1);
    assert!(peak.load(Ordering::SeqCst) <= LIMIT);
    assert_eq!(gate.in_flight(), 0);
}

#[tokio::test]
async fn test_dropped_future_releases_slot() {
    let gate = AdmissionController::new(1);
    let pending = gate.run(std::future::pending::<()>());
    let timed_out = tokio::time::timeout(Duration::from_millis(10), pending).await;
    assert!(timed_out.is_err());
    assert_eq!(gate.in_flight(), 0);
}

#[test]
fn test_panic_inside_section_releases_slot() {
    let gate = AdmissionController::new(1);
    let inner = gate.clone();
    let result = thread::spawn(move || {
        let _permit = inner.try_acquire().unwrap();
        panic!("dispatch blew up");
    })
    .join();
    assert!(result.is_err());
    assert_eq!(gate.in_flight(), 0);
}

#[test]
fn test_cancellation_skips_acquire() {
    let gate = AdmissionController::new(2);
    let token = CancellationToken::new();
    let live = gate.try_acquire_cancellable(&token);
    assert!(live.is_ok());
    token.cancel();
    assert_eq!(
        gate.try_acquire_cancellable(&token).unwrap_err(),
        AdmissionDenied::Cancelled
    );
    assert_eq!(gate.in_flight(), 1);
}
