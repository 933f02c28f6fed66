use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::DailySnapshotDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::daily_snapshots;
use pairlist_core::snapshots::SnapshotStore;
use pairlist_core::Result;

pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SnapshotRepository { pool, writer }
    }

    fn get_snapshot_impl(&self, date_key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let payload = daily_snapshots::table
            .find(date_key)
            .select(daily_snapshots::payload)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(payload)
    }

    /// Stored date keys, ascending.
    pub fn list_snapshot_dates(&self) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;
        let dates = daily_snapshots::table
            .select(daily_snapshots::snapshot_date)
            .order(daily_snapshots::snapshot_date.asc())
            .load::<String>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(dates)
    }
}

#[async_trait]
impl SnapshotStore for SnapshotRepository {
    async fn get_snapshot(&self, date_key: &str) -> Result<Option<String>> {
        self.get_snapshot_impl(date_key)
    }

    async fn put_snapshot(&self, date_key: &str, payload: String) -> Result<()> {
        let row = DailySnapshotDB::new(date_key, payload);
        debug!(
            "Upserting snapshot {} ({} bytes)",
            row.snapshot_date,
            row.payload.len()
        );

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::insert_into(daily_snapshots::table)
                    .values(&row)
                    .on_conflict(daily_snapshots::snapshot_date)
                    .do_update()
                    .set((
                        daily_snapshots::payload.eq(&row.payload),
                        daily_snapshots::updated_at.eq(&row.updated_at),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
