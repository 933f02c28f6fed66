//! Error types for the market data crate.
//!
//! Every variant of [`MarketDataError`] aborts the fetch that produced it.
//! There is no retry classification: a failed page fails the whole listing.

use thiserror::Error;

/// Errors that can occur while fetching market listings.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered with a non-success HTTP status.
    #[error("Failed to fetch page {page} from {provider}: HTTP {status} {message}")]
    HttpStatus {
        /// The provider that returned the status
        provider: String,
        /// The 1-based page being fetched
        page: u32,
        /// HTTP status code
        status: u16,
        /// Reason phrase or provider error message
        message: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("Request to {provider} for page {page} failed: {message}")]
    Request {
        provider: String,
        page: u32,
        message: String,
    },

    /// The provider returned a body that is not a JSON array of entries.
    #[error("Malformed response from {provider} for page {page}: {message}")]
    MalformedResponse {
        provider: String,
        page: u32,
        message: String,
    },

    /// The provider client could not be built from its configuration.
    #[error("Invalid provider configuration: {0}")]
    Configuration(String),
}

impl MarketDataError {
    /// The page this error was raised for, if it came from a page fetch.
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::HttpStatus { page, .. }
            | Self::Request { page, .. }
            | Self::MalformedResponse { page, .. } => Some(*page),
            Self::Configuration(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::HttpStatus {
            provider: "COINGECKO".to_string(),
            page: 2,
            status: 429,
            message: "Too Many Requests".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to fetch page 2 from COINGECKO: HTTP 429 Too Many Requests"
        );

        let error = MarketDataError::MalformedResponse {
            provider: "COINGECKO".to_string(),
            page: 1,
            message: "expected a sequence".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Malformed response from COINGECKO for page 1: expected a sequence"
        );
    }

    #[test]
    fn test_page_accessor() {
        let error = MarketDataError::Request {
            provider: "COINGECKO".to_string(),
            page: 1,
            message: "connection refused".to_string(),
        };
        assert_eq!(error.page(), Some(1));
        assert_eq!(MarketDataError::Configuration("bad".into()).page(), None);
    }
}
