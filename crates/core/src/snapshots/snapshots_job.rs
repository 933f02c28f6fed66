use chrono::NaiveDate;
use log::{error, info};
use std::sync::Arc;

use super::snapshots_model::{DailySnapshot, SnapshotRunOutcome};
use super::snapshots_traits::SnapshotStore;
use crate::constants::{SNAPSHOT_PAGE_COUNT, SNAPSHOT_PER_PAGE};
use crate::errors::Result;
use pairlist_market_data::MarketDataProvider;

/// Fetches the current top listings and stores them under today's key.
pub struct SnapshotJob {
    provider: Arc<dyn MarketDataProvider>,
    store: Arc<dyn SnapshotStore>,
    page_count: u32,
    per_page: u32,
}

impl SnapshotJob {
    pub fn new(provider: Arc<dyn MarketDataProvider>, store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            provider,
            store,
            page_count: SNAPSHOT_PAGE_COUNT,
            per_page: SNAPSHOT_PER_PAGE,
        }
    }

    pub fn with_pages(mut self, page_count: u32, per_page: u32) -> Self {
        self.page_count = page_count;
        self.per_page = per_page;
        self
    }

    /// Runs one snapshot for `today`.
    ///
    /// A failed fetch writes nothing, leaving any earlier value for the key
    /// in place. A successful fetch overwrites the key.
    pub async fn run(&self, today: NaiveDate) -> Result<SnapshotRunOutcome> {
        let entries = match self
            .provider
            .fetch_top_entries(self.page_count, self.per_page)
            .await
        {
            Ok(entries) => entries,
            Err(e) => {
                error!(
                    "Failed to fetch top {} entries for {}: {}",
                    self.page_count.saturating_mul(self.per_page),
                    today,
                    e
                );
                return Err(e.into());
            }
        };

        let snapshot = DailySnapshot::new(today, entries);
        let date_key = snapshot.date_key();
        let payload = snapshot.to_payload()?;

        if let Err(e) = self.store.put_snapshot(&date_key, payload).await {
            error!("Failed to store snapshot {}: {}", date_key, e);
            return Err(e);
        }

        info!(
            "Stored snapshot {} with {} entries",
            date_key,
            snapshot.entries.len()
        );
        Ok(SnapshotRunOutcome {
            date_key,
            entry_count: snapshot.entries.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::snapshots::test_support::MockSnapshotStore;
    use async_trait::async_trait;
    use pairlist_market_data::{MarketDataError, MarketEntry};
    use std::sync::Mutex;

    struct StubProvider {
        pages: Vec<Vec<MarketEntry>>,
        fail: bool,
        calls: Mutex<Vec<(u32, u32)>>,
    }

    impl StubProvider {
        fn with_pages(pages: Vec<Vec<MarketEntry>>) -> Self {
            Self {
                pages,
                fail: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                pages: Vec::new(),
                fail: true,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for StubProvider {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn fetch_markets_page(
            &self,
            page: u32,
            per_page: u32,
        ) -> std::result::Result<Vec<MarketEntry>, MarketDataError> {
            self.calls.lock().unwrap().push((page, per_page));
            if self.fail {
                return Err(MarketDataError::HttpStatus {
                    provider: "STUB".to_string(),
                    page,
                    status: 429,
                    message: "Too Many Requests".to_string(),
                });
            }
            Ok(self.pages.get(page as usize - 1).cloned().unwrap_or_default())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_run_stores_both_pages_under_today() {
        let provider = Arc::new(StubProvider::with_pages(vec![
            vec![
                MarketEntry::new("bitcoin", "btc", 100.0),
                MarketEntry::new("ethereum", "eth", 50.0),
            ],
            vec![MarketEntry::new("solana", "sol", 30.0)],
        ]));
        let store = MockSnapshotStore::new();
        let job = SnapshotJob::new(provider.clone(), Arc::new(store.clone()));

        let outcome = job.run(date(2024, 1, 5)).await.unwrap();

        assert_eq!(outcome.date_key, "2024-01-05");
        assert_eq!(outcome.entry_count, 3);
        assert_eq!(*provider.calls.lock().unwrap(), vec![(1, 250), (2, 250)]);

        let stored = store.raw("2024-01-05").unwrap();
        let snapshot = DailySnapshot::from_payload(date(2024, 1, 5), &stored).unwrap();
        let ids: Vec<_> = snapshot.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["bitcoin", "ethereum", "solana"]);
    }

    #[tokio::test]
    async fn test_run_overwrites_existing_key() {
        let provider = Arc::new(StubProvider::with_pages(vec![vec![MarketEntry::new(
            "bitcoin", "btc", 100.0,
        )]]));
        let store = MockSnapshotStore::new();
        store.insert_entries("2024-01-05", &[MarketEntry::new("old", "old", 1.0)]);
        let job = SnapshotJob::new(provider, Arc::new(store.clone())).with_pages(1, 10);

        job.run(date(2024, 1, 5)).await.unwrap();

        let stored = store.raw("2024-01-05").unwrap();
        assert!(stored.contains("bitcoin"));
        assert!(!stored.contains("\"old\""));
    }

    #[tokio::test]
    async fn test_failed_fetch_writes_nothing() {
        let store = MockSnapshotStore::new();
        store.insert_raw("2024-01-04", "[]");
        let job = SnapshotJob::new(Arc::new(StubProvider::failing()), Arc::new(store.clone()));

        let err = job.run(date(2024, 1, 5)).await.unwrap_err();

        assert!(matches!(err, Error::MarketData(_)));
        assert!(store.raw("2024-01-05").is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let provider = Arc::new(StubProvider::with_pages(vec![vec![MarketEntry::new(
            "bitcoin", "btc", 100.0,
        )]]));
        let store = MockSnapshotStore::new();
        store.set_fail_on_put(true);
        let job = SnapshotJob::new(provider, Arc::new(store.clone())).with_pages(1, 1);

        let err = job.run(date(2024, 1, 5)).await.unwrap_err();

        assert!(matches!(err, Error::Database(_)));
    }
}
