//! Toggle chain scenarios against the in-memory provider

use pvt_application::ProgressTracker;
use pvt_domain::config::TrackerConfig;
use pvt_domain::entities::{GlobalRollup, TestDefinition, TestStatus, UnitStatus, UnitsData};
use pvt_domain::keys;
use pvt_providers::MemoryStateStore;
use std::sync::Arc;

fn tracker_with(config: TrackerConfig) -> (ProgressTracker, MemoryStateStore) {
    let store = MemoryStateStore::new();
    let tracker = ProgressTracker::new(Arc::new(store.clone()), config);
    (tracker, store)
}

async fn stored<T: serde::de::DeserializeOwned>(store: &MemoryStateStore, key: &str) -> T {
    use pvt_domain::ports::StateStore;
    let json = store
        .get(key)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("expected key {key} to be written"));
    serde_json::from_str(&json).unwrap()
}

fn small_template() -> Vec<TestDefinition> {
    vec![
        TestDefinition {
            id: "test-1".to_string(),
            name: "Visual inspection".to_string(),
        },
        TestDefinition {
            id: "test-2".to_string(),
            name: "Power on".to_string(),
        },
    ]
}

#[tokio::test]
async fn single_toggle_moves_the_test_but_not_the_percentage() {
    let (tracker, store) = tracker_with(TrackerConfig::default());

    let checklist = tracker.toggle_test("05", "test-1").await;
    assert_eq!(
        checklist.get("test-1").unwrap().status,
        TestStatus::InProgress
    );

    // Only completed tests count toward the percentage, so the unit stays
    // not-started even though a test moved
    use pvt_domain::ports::StateStore;
    assert_eq!(
        store.get(&keys::unit_progress("05")).await.unwrap().as_deref(),
        Some("0")
    );
    let units: UnitsData = stored(&store, keys::UNITS_DATA).await;
    let summary = &units["05"];
    assert_eq!(summary.completion_percentage, 0);
    assert_eq!(summary.status, UnitStatus::NotStarted);
    assert_eq!(summary.completed_tests, 0);

    let rollup: GlobalRollup = stored(&store, keys::OVERALL_PROGRESS).await;
    assert_eq!(rollup.not_started_count, 64);
    assert_eq!(rollup.completed_count, 0);
}

#[tokio::test]
async fn toggle_cycle_has_period_three() {
    let (tracker, _store) = tracker_with(TrackerConfig::default());

    tracker.toggle_test("01", "test-3").await;
    tracker.toggle_test("01", "test-3").await;
    let checklist = tracker.toggle_test("01", "test-3").await;

    assert_eq!(
        checklist.get("test-3").unwrap().status,
        TestStatus::NotStarted
    );
    assert_eq!(checklist.completed_count(), 0);
}

#[tokio::test]
async fn unknown_test_id_writes_nothing() {
    let (tracker, store) = tracker_with(TrackerConfig::default());

    let checklist = tracker.toggle_test("05", "test-99").await;
    assert_eq!(checklist.len(), 20);
    assert!(checklist.items().iter().all(|t| t.status == TestStatus::NotStarted));

    use pvt_domain::ports::StateStore;
    assert!(!store.exists(&keys::test_items("05")).await.unwrap());
    assert!(!store.exists(keys::UNITS_DATA).await.unwrap());
    assert!(!store.exists(keys::OVERALL_PROGRESS).await.unwrap());
    assert!(!store.exists(keys::RECENT_ACTIVITY).await.unwrap());
}

#[tokio::test]
async fn completing_every_test_reports_exactly_one_hundred() {
    let (tracker, store) = tracker_with(TrackerConfig::default());
    let test_ids: Vec<String> = TrackerConfig::default()
        .template
        .iter()
        .map(|def| def.id.clone())
        .collect();

    // Drive every test to completed, one status step at a time
    for id in &test_ids {
        tracker.toggle_test("05", id).await; // in-progress
    }
    // Before any test completes, the completed bucket is untouched
    let rollup: GlobalRollup = stored(&store, keys::OVERALL_PROGRESS).await;
    assert_eq!(rollup.completed_count, 0);
    assert_eq!(rollup.in_progress_count, 0); // percentage still 0

    for id in &test_ids {
        tracker.toggle_test("05", id).await; // completed
    }

    use pvt_domain::ports::StateStore;
    assert_eq!(
        store.get(&keys::unit_progress("05")).await.unwrap().as_deref(),
        Some("100")
    );
    let units: UnitsData = stored(&store, keys::UNITS_DATA).await;
    assert_eq!(units["05"].status, UnitStatus::Completed);
    assert_eq!(units["05"].completed_tests, 20);

    let rollup: GlobalRollup = stored(&store, keys::OVERALL_PROGRESS).await;
    assert_eq!(rollup.completed_count, 1);
    assert_eq!(rollup.not_started_count, 63);
    // round(100 * 1 / 64) = 2
    assert_eq!(rollup.total_completion, 2);
}

#[tokio::test]
async fn partial_completion_moves_the_unit_to_in_progress() {
    let config = TrackerConfig {
        total_units: 3,
        template: small_template(),
    };
    let (tracker, store) = tracker_with(config);

    // Complete one of the two tests on unit 02
    tracker.toggle_test("02", "test-1").await;
    let checklist = tracker.toggle_test("02", "test-1").await;
    assert_eq!(
        checklist.get("test-1").unwrap().status,
        TestStatus::Completed
    );

    let units: UnitsData = stored(&store, keys::UNITS_DATA).await;
    assert_eq!(units["02"].completion_percentage, 50);
    assert_eq!(units["02"].status, UnitStatus::InProgress);

    let rollup: GlobalRollup = stored(&store, keys::OVERALL_PROGRESS).await;
    assert_eq!(rollup.in_progress_count, 1);
    assert_eq!(rollup.not_started_count, 2);
    assert_eq!(rollup.completed_count, 0);
    assert_eq!(
        rollup.completed_count + rollup.in_progress_count + rollup.not_started_count,
        3
    );
}

#[tokio::test]
async fn every_toggle_appends_an_activity_entry() {
    let (tracker, store) = tracker_with(TrackerConfig::default());

    tracker.toggle_test("05", "test-1").await;
    tracker.toggle_test("07", "test-2").await;

    let entries: Vec<pvt_domain::entities::ActivityEntry> =
        stored(&store, keys::RECENT_ACTIVITY).await;
    assert_eq!(entries.len(), 2);
    // Newest first
    assert_eq!(entries[0].pv_id, "07");
    assert_eq!(entries[0].test_id, "2");
    assert_eq!(entries[1].pv_id, "05");
    assert_eq!(entries[1].new_status, TestStatus::InProgress);
}
