//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The CoinGecko `/coins/markets` provider
//!
//! Providers only know how to fetch a single page. Combining pages into one
//! ranked listing is done by [`MarketDataProvider::fetch_top_entries`].

mod traits;

pub mod coingecko;

pub use traits::MarketDataProvider;
