//! Concurrent writers sharing one store handle.

use super::helpers::{MemoryStore, reading_for, store};
use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use rstest::rstest;
use sensorhub::reading::{adapters::memory::InMemoryReadingRepository, services::ReadingStore};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const WRITERS: u8 = 16;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_persisted(store: MemoryStore) {
    let handles: Vec<_> = (0..WRITERS)
        .map(|index| {
            let writer = store.clone();
            tokio::spawn(async move {
                writer
                    .create(reading_for(&format!("sensor-{index}"), f64::from(index)))
                    .await
            })
        })
        .collect();

    let mut created = Vec::new();
    for handle in handles {
        let reading = handle
            .await
            .expect("writer task should not panic")
            .expect("create should succeed");
        created.push(reading);
    }

    let listed = store.list_all().await.expect("list should succeed");
    let ids: HashSet<_> = listed.iter().map(|reading| reading.id()).collect();

    assert_eq!(listed.len(), usize::from(WRITERS));
    assert_eq!(ids.len(), usize::from(WRITERS));
    for reading in &created {
        assert!(listed.contains(reading));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_see_consistent_snapshots_while_writing(store: MemoryStore) {
    let writer = store.clone();
    let writes = tokio::spawn(async move {
        for index in 0..WRITERS {
            writer
                .create(reading_for("steady", f64::from(index)))
                .await
                .expect("create should succeed");
        }
    });

    let mut last_len = 0;
    while !writes.is_finished() {
        let snapshot = store.list_all().await.expect("list should succeed");
        assert!(snapshot.len() >= last_len);
        last_len = snapshot.len();
        tokio::task::yield_now().await;
    }
    writes.await.expect("writer task should not panic");

    assert_eq!(
        store.list_all().await.expect("list should succeed").len(),
        usize::from(WRITERS)
    );
}

/// Clock whose first reading stalls before it is returned, so the first
/// writer holds an older timestamp while later writers race ahead.
#[derive(Debug, Default)]
struct StallingClock {
    stalled: AtomicBool,
}

impl Clock for StallingClock {
    fn local(&self) -> DateTime<Local> {
        Local::now()
    }

    fn utc(&self) -> DateTime<Utc> {
        let now = Utc::now();
        if !self.stalled.swap(true, Ordering::SeqCst) {
            std::thread::sleep(Duration::from_millis(100));
        }
        now
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn creation_timestamps_follow_insertion_order_under_contention() {
    let store = ReadingStore::new(
        Arc::new(InMemoryReadingRepository::new()),
        Arc::new(StallingClock::default()),
    );

    let slow_writer = store.clone();
    let slow = tokio::spawn(async move { slow_writer.create(reading_for("slow", 10.0)).await });
    tokio::time::sleep(Duration::from_millis(20)).await;
    let fast_writer = store.clone();
    let fast = tokio::spawn(async move { fast_writer.create(reading_for("fast", 20.0)).await });

    slow.await
        .expect("slow writer should not panic")
        .expect("slow create should succeed");
    fast.await
        .expect("fast writer should not panic")
        .expect("fast create should succeed");

    let listed = store.list_all().await.expect("list should succeed");

    assert_eq!(listed.len(), 2);
    assert!(
        listed
            .windows(2)
            .all(|pair| {
                matches!(pair, [earlier, later] if earlier.created_at() <= later.created_at())
            })
    );
}
