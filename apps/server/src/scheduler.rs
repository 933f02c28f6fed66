//! Background scheduler for the daily snapshot job.
//!
//! Runs once a day at a configured local wall-clock time, and optionally
//! once at startup.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime, NaiveTime};
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::config::SnapshotSchedule;
use crate::main_lib::AppState;
use pairlist_core::snapshots::SnapshotRunOutcome;

/// Starts the background snapshot scheduler.
pub fn start_snapshot_scheduler(state: Arc<AppState>, schedule: SnapshotSchedule) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Snapshot scheduler started (daily at {})",
            schedule.time.format("%H:%M")
        );

        if schedule.run_on_start {
            run_scheduled_snapshot(&state).await;
        }

        loop {
            let delay = duration_until_next_run(Local::now().naive_local(), schedule.time);
            debug!("Next snapshot in {}s", delay.as_secs());
            tokio::time::sleep(delay).await;
            run_scheduled_snapshot(&state).await;
        }
    })
}

/// Runs the snapshot job once for the state's current date.
pub async fn run_snapshot_now(state: &AppState) -> pairlist_core::Result<SnapshotRunOutcome> {
    let today = state.clock.today();
    state.snapshot_job.run(today).await
}

async fn run_scheduled_snapshot(state: &Arc<AppState>) {
    info!("Running scheduled snapshot...");
    match run_snapshot_now(state).await {
        Ok(outcome) => info!(
            "Scheduled snapshot completed: {} entries stored under {}",
            outcome.entry_count, outcome.date_key
        ),
        Err(e) => warn!("Scheduled snapshot failed: {}", e),
    }
}

/// Time from `now` until the next occurrence of `at`. A run time equal to
/// `now` counts as already passed.
pub fn duration_until_next_run(now: NaiveDateTime, at: NaiveTime) -> Duration {
    let today_run = now.date().and_time(at);
    let next = if today_run > now {
        today_run
    } else {
        today_run + chrono::Duration::days(1)
    };
    (next - now).to_std().unwrap_or(Duration::ZERO)
}
