//! Pairlist Core - Domain models, services, and traits.
//!
//! This crate holds the daily snapshot job and the multi-day intersection
//! engine. It is storage-agnostic: persistence goes through the
//! [`snapshots::SnapshotStore`] trait, implemented by `storage-sqlite`.

pub mod constants;
pub mod errors;
pub mod intersection;
pub mod snapshots;
pub mod utils;

// Re-export the market data types the domain is built on
pub use pairlist_market_data::{MarketDataError, MarketDataProvider, MarketEntry};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
