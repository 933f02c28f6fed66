//! SQLite storage implementation for daily snapshots.

mod model;
mod repository;

pub use model::DailySnapshotDB;
pub use repository::SnapshotRepository;
