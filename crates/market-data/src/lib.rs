//! Pairlist Market Data Crate
//!
//! This crate fetches ranked cryptocurrency market listings from an external
//! provider and exposes them as provider-agnostic [`MarketEntry`] records.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +--------------------+     +------------------+
//! | Daily job (core) | --> | MarketDataProvider | --> |  CoinGecko API   |
//! +------------------+     +--------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  MarketEntry[]   |  (page 1, page 2, ...)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`MarketEntry`] - One ranked market listing (id, symbol, market cap, ...)
//! - [`MarketDataProvider`] - Paged listing source; `fetch_top_entries` concatenates pages
//! - [`CoinGeckoProvider`] - `/coins/markets` implementation
//! - [`MarketDataError`] - Upstream fetch failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::MarketEntry;
pub use provider::coingecko::{CoinGeckoConfig, CoinGeckoProvider};
pub use provider::MarketDataProvider;
