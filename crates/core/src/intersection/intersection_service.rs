use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

use super::intersection_model::IntersectionResult;
use super::intersection_traits::IntersectionServiceTrait;
use crate::errors::{Error, Result};
use crate::snapshots::{DailySnapshot, DateRange, SnapshotStore};
use crate::utils::time_utils::date_key;
use pairlist_market_data::MarketEntry;

pub struct IntersectionService {
    store: Arc<dyn SnapshotStore>,
}

impl IntersectionService {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Reads each day of the range in order. Days without a stored
    /// snapshot are skipped.
    async fn load_snapshots(&self, range: &DateRange) -> Result<Vec<DailySnapshot>> {
        let mut snapshots = Vec::new();
        for day in range.days() {
            let key = date_key(day);
            match self.store.get_snapshot(&key).await? {
                Some(payload) => snapshots.push(DailySnapshot::from_payload(day, &payload)?),
                None => debug!("No snapshot stored for {}", key),
            }
        }
        Ok(snapshots)
    }
}

#[async_trait]
impl IntersectionServiceTrait for IntersectionService {
    async fn compute_intersection(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        limit: i64,
    ) -> Result<IntersectionResult> {
        let range = DateRange::new(start, end)?;
        let snapshots = self.load_snapshots(&range).await?;

        if snapshots.is_empty() {
            return Err(Error::NoData);
        }

        debug!(
            "Intersecting {} of {} days from {} to {} (limit {})",
            snapshots.len(),
            range.num_days(),
            start,
            end,
            limit
        );

        let days: Vec<Vec<MarketEntry>> = snapshots
            .into_iter()
            .map(|snapshot| top_entries(snapshot.entries, limit))
            .collect();

        Ok(intersect_snapshots(&days, limit))
    }
}

fn limit_as_len(limit: i64) -> Option<usize> {
    (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX))
}

/// A day's listing cut to its first `limit` entries (stored order).
fn top_entries(mut entries: Vec<MarketEntry>, limit: i64) -> Vec<MarketEntry> {
    if let Some(len) = limit_as_len(limit) {
        entries.truncate(len);
    }
    entries
}

/// Label used for an id in `filtered_out`: the uppercased symbol, or the
/// uppercased id when the symbol is empty.
fn filtered_label(entry: &MarketEntry) -> String {
    if entry.symbol.is_empty() {
        entry.id.to_uppercase()
    } else {
        entry.symbol.to_uppercase()
    }
}

/// Intersects per-day listings that have already been cut to `limit`.
///
/// The first day seeds the candidates and supplies the surviving records;
/// every day (the first included) then removes candidates whose id it does
/// not contain. Survivors are stably sorted by descending market cap and cut
/// to `limit` again. Ids seen on any day but not surviving are reported in
/// first-seen order, labelled from their first occurrence.
pub fn intersect_snapshots(days: &[Vec<MarketEntry>], limit: i64) -> IntersectionResult {
    let Some(seed) = days.first() else {
        return IntersectionResult::default();
    };

    let mut common: Vec<&MarketEntry> = seed.iter().collect();
    for day in days {
        let day_ids: HashSet<&str> = day.iter().map(|e| e.id.as_str()).collect();
        common.retain(|entry| day_ids.contains(entry.id.as_str()));
    }

    let common_ids: HashSet<&str> = common.iter().map(|&e| e.id.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let filtered_out = days
        .iter()
        .flatten()
        .filter(|&entry| seen.insert(entry.id.as_str()))
        .filter(|&entry| !common_ids.contains(entry.id.as_str()))
        .map(filtered_label)
        .collect();

    common.sort_by(|a, b| b.market_cap_or_zero().total_cmp(&a.market_cap_or_zero()));
    if let Some(len) = limit_as_len(limit) {
        common.truncate(len);
    }

    IntersectionResult {
        pairlist: common.iter().map(|e| e.symbol.to_uppercase()).collect(),
        filtered_out,
    }
}
