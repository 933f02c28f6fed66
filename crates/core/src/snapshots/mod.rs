//! Snapshots module - daily snapshot models, store trait, and the job that
//! writes them.

mod snapshots_job;
mod snapshots_model;
mod snapshots_traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use snapshots_job::SnapshotJob;
pub use snapshots_model::{DailySnapshot, DateRange, SnapshotRunOutcome};
pub use snapshots_traits::SnapshotStore;
