use async_trait::async_trait;
use chrono::NaiveDate;

use super::intersection_model::IntersectionResult;
use crate::errors::Result;

/// Trait for intersection service operations
#[async_trait]
pub trait IntersectionServiceTrait: Send + Sync {
    /// Intersect the stored snapshots from `start` to `end` inclusive.
    ///
    /// `limit > 0` keeps only each day's top `limit` entries and caps the
    /// returned pairlist at `limit`; `limit <= 0` uses whole snapshots.
    async fn compute_intersection(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        limit: i64,
    ) -> Result<IntersectionResult>;
}
