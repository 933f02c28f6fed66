use serde::{Deserialize, Serialize};

/// One ranked market listing.
///
/// Field names match the provider's wire format so that a fetched page
/// deserializes directly and a stored snapshot round-trips unchanged.
/// Identity is `id`; `symbol` is not unique across listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketEntry {
    /// Provider-unique identifier (e.g. "bitcoin")
    pub id: String,

    /// Ticker symbol, lowercase as delivered (e.g. "btc")
    #[serde(default)]
    pub symbol: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    pub current_price: Option<f64>,

    pub market_cap: Option<f64>,

    pub market_cap_rank: Option<u32>,

    /// 24h traded volume
    pub total_volume: Option<f64>,

    pub high_24h: Option<f64>,

    pub low_24h: Option<f64>,

    pub price_change_percentage_24h: Option<f64>,
}

impl MarketEntry {
    /// Create an entry with identity fields and a market cap only.
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, market_cap: f64) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: String::new(),
            current_price: None,
            market_cap: Some(market_cap),
            market_cap_rank: None,
            total_volume: None,
            high_24h: None,
            low_24h: None,
            price_change_percentage_24h: None,
        }
    }

    /// Market cap used for ranking. A missing value ranks as zero.
    pub fn market_cap_or_zero(&self) -> f64 {
        self.market_cap.unwrap_or(0.0)
    }
}
