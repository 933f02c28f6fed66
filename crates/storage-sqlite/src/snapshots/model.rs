//! Database models for daily snapshots.

use diesel::prelude::*;

/// One stored snapshot: the JSON payload for a `YYYY-MM-DD` key.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::daily_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailySnapshotDB {
    pub snapshot_date: String,
    pub payload: String,
    pub updated_at: String,
}

impl DailySnapshotDB {
    pub fn new(snapshot_date: impl Into<String>, payload: String) -> Self {
        Self {
            snapshot_date: snapshot_date.into(),
            payload,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
