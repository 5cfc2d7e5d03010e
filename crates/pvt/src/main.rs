//! PVT - Entry Point
//!
//! CLI for the PV commissioning test tracker. All reads go through the
//! query facade; the only mutation is `pvt toggle`, which drives the
//! application layer's toggle chain.

use anyhow::{Context, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use pvt_application::{ProgressQueries, ProgressTracker};
use pvt_domain::config::TrackerConfig;
use pvt_domain::entities::{ActivityEntry, Checklist, TestStatus, completion_percentage};
use pvt_domain::keys;
use pvt_infrastructure::{ConfigLoader, build_state_store, init_logging};
use std::time::Duration;

/// Command line interface for the PV commissioning test tracker
#[derive(Parser, Debug)]
#[command(name = "pvt")]
#[command(about = "PV Commissioning Test Tracker")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fleet rollup and recent activity
    Dashboard,
    /// List every unit with its completion percentage
    Units,
    /// Show one unit's checklist
    Show {
        /// Unit id ("05", "5" or "PV05")
        unit: String,
    },
    /// Advance one test along not-started -> in-progress -> completed
    Toggle {
        /// Unit id ("05", "5" or "PV05")
        unit: String,
        /// Test id ("test-3" or "3")
        test: String,
    },
    /// Re-render the dashboard every 5 seconds
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("failed to load configuration")?;
    init_logging(&config.logging).context("failed to initialize logging")?;

    let store = build_state_store(&config.storage);
    let tracker_config = config.tracker.tracker_config();
    let queries = ProgressQueries::new(store.clone(), tracker_config.clone());
    let tracker = ProgressTracker::new(store, tracker_config.clone());

    match cli.command {
        Command::Dashboard => print_dashboard(&queries).await,
        Command::Units => print_units(&queries).await,
        Command::Show { unit } => {
            let unit_id = normalize_unit(&unit, &tracker_config)?;
            let checklist = queries.checklist(&unit_id).await;
            print_checklist(&unit_id, &checklist);
        }
        Command::Toggle { unit, test } => {
            let unit_id = normalize_unit(&unit, &tracker_config)?;
            let test_id = normalize_test(&test);
            let checklist = tracker.toggle_test(&unit_id, &test_id).await;
            match checklist.get(&test_id) {
                Some(record) => println!("PV{unit_id} {}: {}", record.id, record.status),
                None => println!("PV{unit_id} has no test '{test_id}'"),
            }
        }
        Command::Watch => {
            let mut interval = tokio::time::interval(Duration::from_secs(5));
            loop {
                interval.tick().await;
                print_dashboard(&queries).await;
                println!();
            }
        }
    }

    Ok(())
}

/// Canonical unit id from user input, validated against the fleet
fn normalize_unit(input: &str, config: &TrackerConfig) -> anyhow::Result<String> {
    let digits = input
        .trim()
        .trim_start_matches("PV")
        .trim_start_matches("pv");
    let seq: u32 = digits
        .parse()
        .with_context(|| format!("'{input}' is not a unit id"))?;
    if seq == 0 || seq > config.total_units {
        bail!(
            "unit {seq} is outside the fleet (01..{})",
            keys::unit_id(config.total_units)
        );
    }
    Ok(keys::unit_id(seq))
}

/// Canonical test id from user input ("3" becomes "test-3")
fn normalize_test(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("test-") {
        trimmed.to_string()
    } else {
        format!("test-{trimmed}")
    }
}

async fn print_dashboard(queries: &ProgressQueries) {
    let rollup = queries.overall().await;
    println!("PV Progress Dashboard");
    println!(
        "  {}% complete  ({} of {} units)",
        rollup.total_completion, rollup.completed_count, rollup.total_pvs
    );
    println!(
        "  completed: {}  in progress: {}  not started: {}",
        rollup.completed_count, rollup.in_progress_count, rollup.not_started_count
    );

    let activity = queries.recent_activity().await;
    println!("Recent Activity");
    if activity.is_empty() {
        println!("  no recent activity");
    }
    for entry in activity {
        println!("  {}", format_activity(&entry));
    }
}

async fn print_units(queries: &ProgressQueries) {
    for row in queries.units_overview().await {
        let tests = match row.completed_tests {
            Some(count) => format!("  ({count} tests completed)"),
            None => String::new(),
        };
        println!(
            "{}  {:>3}%  {}{tests}",
            row.name, row.completion_percentage, row.status
        );
    }
}

fn print_checklist(unit_id: &str, checklist: &Checklist) {
    let counts = checklist.status_counts();
    let percentage = completion_percentage(counts.completed, checklist.len());
    println!("PV{unit_id}  {percentage}% complete");
    println!(
        "  completed: {}  in progress: {}  not started: {}",
        counts.completed, counts.in_progress, counts.not_started
    );
    for item in checklist.items() {
        println!("  [{}] {} - {}", status_mark(item.status), item.id, item.name);
    }
}

fn status_mark(status: TestStatus) -> char {
    match status {
        TestStatus::Completed => 'x',
        TestStatus::InProgress => '~',
        TestStatus::NotStarted => ' ',
    }
}

/// "PV05 test 1 marked as complete, 3m ago"
fn format_activity(entry: &ActivityEntry) -> String {
    let status_text = match entry.new_status {
        TestStatus::Completed => "marked as complete",
        TestStatus::InProgress => "marked as in progress",
        TestStatus::NotStarted => "marked as not started",
    };
    let minutes = (Utc::now() - entry.timestamp).num_minutes();
    let time_ago = if minutes < 60 {
        format!("{minutes}m ago")
    } else {
        format!("{}h ago", minutes / 60)
    };
    format!(
        "PV{} test {} {status_text}, {time_ago}",
        entry.pv_id, entry.test_id
    )
}
