//! CoinGecko wire types that are not market entries.

use serde::Deserialize;

/// Error body returned by CoinGecko on non-success responses.
///
/// The public API uses two shapes depending on the failure:
/// `{"status": {"error_code": 429, "error_message": "..."}}` and
/// `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub(super) struct CoinGeckoErrorBody {
    pub status: Option<CoinGeckoStatus>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CoinGeckoStatus {
    #[allow(dead_code)]
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}

impl CoinGeckoErrorBody {
    pub fn message(self) -> Option<String> {
        self.status
            .and_then(|s| s.error_message)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}
