//! CoinGecko provider for ranked cryptocurrency listings.
//!
//! Uses the public `/coins/markets` endpoint ordered by market cap. The
//! endpoint rejects requests without a browser-like `User-Agent`, so every
//! request carries the configured one.

mod models;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Request};
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::MarketEntry;
use crate::provider::MarketDataProvider;

use models::CoinGeckoErrorBody;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Quote currency for prices and market caps
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Browser user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`CoinGeckoProvider`].
#[derive(Clone, Debug)]
pub struct CoinGeckoConfig {
    /// API root without the endpoint path, e.g. `https://api.coingecko.com/api/v3`
    pub base_url: String,
    pub vs_currency: String,
    pub user_agent: String,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// CoinGecko `/coins/markets` provider.
///
/// # Example
///
/// ```ignore
/// use pairlist_market_data::{CoinGeckoConfig, CoinGeckoProvider, MarketDataProvider};
///
/// let provider = CoinGeckoProvider::new(CoinGeckoConfig::default())?;
/// let top_500 = provider.fetch_top_entries(2, 250).await?;
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    config: CoinGeckoConfig,
}

impl CoinGeckoProvider {
    pub fn new(config: CoinGeckoConfig) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MarketDataError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the request for one page of listings.
    fn markets_request(&self, page: u32, per_page: u32) -> Result<Request, MarketDataError> {
        self.client
            .get(self.markets_url())
            .header(USER_AGENT, self.config.user_agent.as_str())
            .query(&[
                ("vs_currency", self.config.vs_currency.as_str()),
                ("order", "market_cap_desc"),
                ("per_page", per_page.to_string().as_str()),
                ("page", page.to_string().as_str()),
                ("sparkline", "false"),
            ])
            .build()
            .map_err(|e| MarketDataError::Request {
                provider: PROVIDER_ID.to_string(),
                page,
                message: e.to_string(),
            })
    }
}

/// Best-effort description of a failed response.
fn describe_failure(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<CoinGeckoErrorBody>(body)
        .ok()
        .and_then(CoinGeckoErrorBody::message)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_default()
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_markets_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<MarketEntry>, MarketDataError> {
        let request = self.markets_request(page, per_page)?;

        let request_error = |e: reqwest::Error| MarketDataError::Request {
            provider: PROVIDER_ID.to_string(),
            page,
            message: e.to_string(),
        };

        let response = self.client.execute(request).await.map_err(request_error)?;
        let status = response.status();
        let body = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                page,
                status: status.as_u16(),
                message: describe_failure(status, &body),
            });
        }

        serde_json::from_str::<Vec<MarketEntry>>(&body).map_err(|e| {
            MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                page,
                message: e.to_string(),
            }
        })
    }
}
