//! Market data models
//!
//! - `entry` - One ranked market listing as returned by the provider (MarketEntry)

mod entry;

pub use entry::MarketEntry;
