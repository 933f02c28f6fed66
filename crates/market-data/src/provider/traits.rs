//! Market data provider trait definitions.

use async_trait::async_trait;
use log::{debug, error, info};

use crate::errors::MarketDataError;
use crate::models::MarketEntry;

/// Trait for paged market listing providers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use pairlist_market_data::{MarketDataError, MarketDataProvider, MarketEntry};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn fetch_markets_page(
///         &self,
///         page: u32,
///         per_page: u32,
///     ) -> Result<Vec<MarketEntry>, MarketDataError> {
///         // ... call the upstream API
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch one page of listings ordered by descending market cap.
    ///
    /// `page` is 1-based.
    async fn fetch_markets_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<MarketEntry>, MarketDataError>;

    /// Fetch the top `page_count * per_page` listings.
    ///
    /// Pages are requested one after another and concatenated in request
    /// order. The first failing page aborts the fetch and its error is
    /// returned; entries from earlier pages are discarded.
    async fn fetch_top_entries(
        &self,
        page_count: u32,
        per_page: u32,
    ) -> Result<Vec<MarketEntry>, MarketDataError> {
        let mut entries =
            Vec::with_capacity(page_count.saturating_mul(per_page).min(10_000) as usize);

        for page in 1..=page_count {
            match self.fetch_markets_page(page, per_page).await {
                Ok(batch) => {
                    debug!("{}: page {} returned {} entries", self.id(), page, batch.len());
                    entries.extend(batch);
                }
                Err(e) => {
                    error!(
                        "Error fetching top {} entries from {}: {}",
                        page_count.saturating_mul(per_page),
                        self.id(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        info!("Fetched {} entries from {} successfully", entries.len(), self.id());
        Ok(entries)
    }
}
