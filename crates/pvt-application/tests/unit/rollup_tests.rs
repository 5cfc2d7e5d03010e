//! Global rollup recomputation properties

use chrono::Utc;
use pvt_application::use_cases::GlobalRollupStore;
use pvt_domain::entities::{UnitStatus, UnitSummary, UnitsData};
use pvt_domain::keys;

fn summary(percentage: u8, completed: usize) -> UnitSummary {
    UnitSummary {
        completion_percentage: percentage,
        status: UnitStatus::from_percentage(percentage),
        completed_tests: completed,
        timestamp: Utc::now(),
    }
}

#[test]
fn empty_map_counts_every_unit_as_not_started() {
    let rollup = GlobalRollupStore::recompute(&UnitsData::new(), 64);
    assert_eq!(rollup.not_started_count, 64);
    assert_eq!(rollup.completed_count, 0);
    assert_eq!(rollup.in_progress_count, 0);
    assert_eq!(rollup.total_completion, 0);
}

#[test]
fn category_counts_always_sum_to_the_fleet_size() {
    let mut units = UnitsData::new();
    units.insert(keys::unit_id(1), summary(100, 20));
    units.insert(keys::unit_id(2), summary(45, 9));
    units.insert(keys::unit_id(5), summary(0, 0));

    for total in [3, 5, 64] {
        let rollup = GlobalRollupStore::recompute(&units, total);
        assert_eq!(
            rollup.completed_count + rollup.in_progress_count + rollup.not_started_count,
            total,
            "counts must sum to the fleet size for total={total}"
        );
    }
}

#[test]
fn absent_units_count_as_not_started() {
    let mut units = UnitsData::new();
    units.insert(keys::unit_id(3), summary(100, 20));

    let rollup = GlobalRollupStore::recompute(&units, 4);
    assert_eq!(rollup.completed_count, 1);
    assert_eq!(rollup.in_progress_count, 0);
    assert_eq!(rollup.not_started_count, 3);
}

#[test]
fn entries_outside_the_configured_fleet_are_ignored() {
    let mut units = UnitsData::new();
    units.insert("99".to_string(), summary(100, 20));

    let rollup = GlobalRollupStore::recompute(&units, 3);
    assert_eq!(rollup.completed_count, 0);
    assert_eq!(rollup.not_started_count, 3);
}

#[test]
fn fleet_percentage_gives_no_credit_for_partial_units() {
    let mut units = UnitsData::new();
    units.insert(keys::unit_id(1), summary(100, 20));
    units.insert(keys::unit_id(2), summary(99, 19));
    units.insert(keys::unit_id(3), summary(50, 10));

    let rollup = GlobalRollupStore::recompute(&units, 3);
    // Only the single 100% unit counts: round(100 * 1 / 3) = 33
    assert_eq!(rollup.total_completion, 33);
}
