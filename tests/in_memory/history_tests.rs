//! Listed history order and wire shape.

use super::helpers::{MemoryStore, reading_for, store};
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_serialises_in_creation_order(store: MemoryStore) {
    for (sensor, humidity) in [("attic", 40.0), ("cellar", 80.0), ("garage", 55.5)] {
        store
            .create(reading_for(sensor, humidity))
            .await
            .expect("create should succeed");
    }

    let listed = store.list_all().await.expect("list should succeed");
    let json = serde_json::to_value(&listed).expect("serialise history");
    let sensors: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|reading| reading.get("sensorId").and_then(Value::as_str))
        .collect();

    assert_eq!(sensors, vec!["attic", "cellar", "garage"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_timestamps_never_decrease(store: MemoryStore) {
    for index in 0..5_u8 {
        store
            .create(reading_for("clocked", f64::from(index)))
            .await
            .expect("create should succeed");
    }

    let listed = store.list_all().await.expect("list should succeed");

    assert!(
        listed
            .windows(2)
            .all(|pair| {
                matches!(pair, [earlier, later] if earlier.created_at() <= later.created_at())
            })
    );
}
