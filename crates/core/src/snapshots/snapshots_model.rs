use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::{date_key, get_days_between};
use pairlist_market_data::MarketEntry;

/// Ordered market listing captured on one calendar date.
#[derive(Clone, Debug, PartialEq)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub entries: Vec<MarketEntry>,
}

impl DailySnapshot {
    pub fn new(date: NaiveDate, entries: Vec<MarketEntry>) -> Self {
        Self { date, entries }
    }

    /// Decode a stored payload (a JSON array of entries).
    pub fn from_payload(date: NaiveDate, payload: &str) -> Result<Self> {
        let entries: Vec<MarketEntry> = serde_json::from_str(payload)?;
        Ok(Self { date, entries })
    }

    pub fn to_payload(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    pub fn date_key(&self) -> String {
        date_key(self.date)
    }
}

/// Inclusive calendar date range with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days` most recent calendar days ending with `today`.
    ///
    /// `days` must be positive.
    pub fn trailing_days(days: u64, today: NaiveDate) -> Result<Self> {
        let span = days.saturating_sub(1);
        let start = today
            .checked_sub_days(Days::new(span))
            .ok_or(ValidationError::RangeTooLong {
                days: i64::try_from(days).unwrap_or(i64::MAX),
                max: (today - NaiveDate::MIN).num_days() + 1,
            })?;
        Self::new(start, today)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn ensure_max_days(self, max_days: i64) -> Result<Self> {
        if max_days > 0 && self.num_days() > max_days {
            return Err(ValidationError::RangeTooLong {
                days: self.num_days(),
                max: max_days,
            }
            .into());
        }
        Ok(self)
    }

    /// Every date in the range, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        get_days_between(self.start, self.end)
    }
}

/// Result of one successful snapshot job run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRunOutcome {
    pub date_key: String,
    pub entry_count: usize,
}
