/// Date key format for stored snapshots
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Pages requested per daily snapshot
pub const SNAPSHOT_PAGE_COUNT: u32 = 2;

/// Entries per page; 2 x 250 gives the top 500 by market cap
pub const SNAPSHOT_PER_PAGE: u32 = 250;
