//! Query facade defaults and fallback order

use chrono::Utc;
use pvt_application::ProgressQueries;
use pvt_domain::config::TrackerConfig;
use pvt_domain::entities::{TestStatus, UnitStatus, UnitSummary, UnitsData};
use pvt_domain::keys;
use pvt_domain::ports::StateStore;
use pvt_providers::{MemoryStateStore, NullStateStore};
use std::sync::Arc;

#[tokio::test]
async fn every_query_has_a_default_when_nothing_is_persisted() {
    let queries = ProgressQueries::new(Arc::new(NullStateStore::new()), TrackerConfig::default());

    let checklist = queries.checklist("05").await;
    assert_eq!(checklist.len(), 20);
    assert!(
        checklist
            .items()
            .iter()
            .all(|t| t.status == TestStatus::NotStarted)
    );

    assert_eq!(queries.unit_progress("05").await, 0);
    assert!(queries.units_data().await.is_empty());
    assert!(queries.recent_activity().await.is_empty());

    let rollup = queries.overall().await;
    assert_eq!(rollup.total_pvs, 64);
    assert_eq!(rollup.not_started_count, 64);
    assert_eq!(rollup.total_completion, 0);

    let overview = queries.units_overview().await;
    assert_eq!(overview.len(), 64);
    assert!(overview.iter().all(|row| row.completion_percentage == 0));
    assert_eq!(overview[4].id, "05");
    assert_eq!(overview[4].name, "PV05");
}

#[tokio::test]
async fn unit_progress_prefers_the_summary_map_over_the_scalar() {
    let store = MemoryStateStore::new();

    let mut units = UnitsData::new();
    units.insert(
        "07".to_string(),
        UnitSummary {
            completion_percentage: 55,
            status: UnitStatus::InProgress,
            completed_tests: 11,
            timestamp: Utc::now(),
        },
    );
    store
        .set(keys::UNITS_DATA, &serde_json::to_string(&units).unwrap())
        .await
        .unwrap();
    store.set(&keys::unit_progress("07"), "40").await.unwrap();

    let queries = ProgressQueries::new(Arc::new(store), TrackerConfig::default());
    assert_eq!(queries.unit_progress("07").await, 55);
}

#[tokio::test]
async fn unit_progress_falls_back_to_the_scalar_key() {
    let store = MemoryStateStore::new();
    store.set(&keys::unit_progress("07"), "40").await.unwrap();

    let queries = ProgressQueries::new(Arc::new(store), TrackerConfig::default());
    assert_eq!(queries.unit_progress("07").await, 40);

    let overview = queries.units_overview().await;
    let row = overview.iter().find(|r| r.id == "07").unwrap();
    assert_eq!(row.completion_percentage, 40);
    assert_eq!(row.status, UnitStatus::InProgress);
    // No summary map entry, so the canonical count is unknown
    assert_eq!(row.completed_tests, None);
}

#[tokio::test]
async fn unreadable_checklist_falls_back_to_the_template() {
    let store = MemoryStateStore::new();
    store
        .set(&keys::test_items("05"), "not even json")
        .await
        .unwrap();

    let queries = ProgressQueries::new(Arc::new(store), TrackerConfig::default());
    let checklist = queries.checklist("05").await;
    assert_eq!(checklist.len(), 20);
    assert!(
        checklist
            .items()
            .iter()
            .all(|t| t.status == TestStatus::NotStarted)
    );
}

#[tokio::test]
async fn unreadable_rollup_falls_back_to_the_untouched_fleet() {
    let store = MemoryStateStore::new();
    store.set(keys::OVERALL_PROGRESS, "[]").await.unwrap();

    let queries = ProgressQueries::new(Arc::new(store), TrackerConfig::with_total_units(3));
    let rollup = queries.overall().await;
    assert_eq!(rollup.total_pvs, 3);
    assert_eq!(rollup.not_started_count, 3);
}

#[tokio::test]
async fn out_of_range_progress_scalar_reads_as_zero() {
    let store = MemoryStateStore::new();
    store.set(&keys::unit_progress("05"), "150").await.unwrap();

    let queries = ProgressQueries::new(Arc::new(store), TrackerConfig::default());
    assert_eq!(queries.unit_progress("05").await, 0);

    let overview = queries.units_overview().await;
    let row = overview.iter().find(|r| r.id == "05").unwrap();
    assert_eq!(row.completion_percentage, 0);
    assert_eq!(row.status, UnitStatus::NotStarted);
}

#[tokio::test]
async fn unreadable_progress_scalar_reads_as_zero() {
    let store = MemoryStateStore::new();
    store
        .set(&keys::unit_progress("05"), "not-a-number")
        .await
        .unwrap();

    let queries = ProgressQueries::new(Arc::new(store), TrackerConfig::default());
    assert_eq!(queries.unit_progress("05").await, 0);
}
