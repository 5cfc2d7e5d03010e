//! Activity log bounds and ordering

use chrono::Utc;
use pvt_application::use_cases::ActivityLog;
use pvt_domain::entities::{ActivityEntry, TestStatus};
use pvt_providers::{MemoryStateStore, NullStateStore};
use std::sync::Arc;

fn entry(unit: &str, test: &str) -> ActivityEntry {
    ActivityEntry::status_change(unit, test, TestStatus::InProgress, Utc::now())
}

#[tokio::test]
async fn log_never_exceeds_ten_entries() {
    let log = ActivityLog::new(Arc::new(MemoryStateStore::new()));

    for n in 1..=11 {
        log.append(entry("01", &format!("test-{n}"))).await;
    }

    let entries = log.recent().await;
    assert_eq!(entries.len(), 10);
    // Newest first: the eleventh append leads, the first is gone
    assert_eq!(entries[0].test_id, "11");
    assert_eq!(entries[9].test_id, "2");
    assert!(entries.iter().all(|e| e.test_id != "1"));
}

#[tokio::test]
async fn empty_log_reads_as_empty_vec() {
    let log = ActivityLog::new(Arc::new(MemoryStateStore::new()));
    assert!(log.recent().await.is_empty());
}

#[tokio::test]
async fn append_is_non_fatal_when_nothing_persists() {
    // The null store drops every write; append must still succeed silently
    let log = ActivityLog::new(Arc::new(NullStateStore::new()));
    log.append(entry("01", "test-1")).await;
    assert!(log.recent().await.is_empty());
}

#[tokio::test]
async fn unreadable_log_falls_back_to_empty() {
    use pvt_domain::ports::StateStore;
    let store = MemoryStateStore::new();
    store
        .set(pvt_domain::keys::RECENT_ACTIVITY, "{broken")
        .await
        .unwrap();

    let log = ActivityLog::new(Arc::new(store));
    assert!(log.recent().await.is_empty());

    // And an append starts a fresh, valid log
    log.append(entry("02", "test-4")).await;
    let entries = log.recent().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].pv_id, "02");
}
