//! Checklist entities
//!
//! A checklist is the ordered list of test records for one unit. It is the
//! source of truth everything else (unit summaries, the fleet rollup) is
//! derived from. Records are created from a fixed template at first access
//! and are never deleted; only their status changes, and only through
//! [`Checklist::toggle`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state status of a single test record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestStatus {
    /// Test has not been touched yet
    NotStarted,
    /// Test has been started but not signed off
    InProgress,
    /// Test is signed off
    Completed,
}

impl TestStatus {
    /// Advance along the toggle cycle: not-started -> in-progress ->
    /// completed -> not-started
    pub fn advance(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }

    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template entry: the fixed id and display name of one test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDefinition {
    /// Stable identifier, unique within a unit (e.g. "test-3")
    pub id: String,
    /// Immutable display label
    pub name: String,
}

/// One checklist line item with its current status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Stable identifier, unique within a unit
    pub id: String,
    /// Immutable display label
    pub name: String,
    /// Current tri-state status
    pub status: TestStatus,
}

/// Per-checklist counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Number of completed tests
    pub completed: usize,
    /// Number of in-progress tests
    pub in_progress: usize,
    /// Number of not-started tests
    pub not_started: usize,
}

/// Ordered checklist for one unit
///
/// Serializes as a bare JSON array of test records - the shape stored under
/// the `testItems-<unitId>` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    items: Vec<TestRecord>,
}

impl Checklist {
    /// Build a fresh checklist from a template, every test not-started
    pub fn from_template(template: &[TestDefinition]) -> Self {
        Self {
            items: template
                .iter()
                .map(|def| TestRecord {
                    id: def.id.clone(),
                    name: def.name.clone(),
                    status: TestStatus::NotStarted,
                })
                .collect(),
        }
    }

    /// Test records in display order
    pub fn items(&self) -> &[TestRecord] {
        &self.items
    }

    /// Total number of tests in this checklist
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the checklist has no tests
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a test record by id
    pub fn get(&self, test_id: &str) -> Option<&TestRecord> {
        self.items.iter().find(|item| item.id == test_id)
    }

    /// Advance the named test's status along the toggle cycle
    ///
    /// Returns the new status, or `None` when no test with that id exists
    /// (the checklist is left untouched).
    pub fn toggle(&mut self, test_id: &str) -> Option<TestStatus> {
        let item = self.items.iter_mut().find(|item| item.id == test_id)?;
        item.status = item.status.advance();
        Some(item.status)
    }

    /// Count records in each status
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for item in &self.items {
            match item.status {
                TestStatus::Completed => counts.completed += 1,
                TestStatus::InProgress => counts.in_progress += 1,
                TestStatus::NotStarted => counts.not_started += 1,
            }
        }
        counts
    }

    /// Number of completed tests
    pub fn completed_count(&self) -> usize {
        self.status_counts().completed
    }
}
