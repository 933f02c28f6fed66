use async_trait::async_trait;

use crate::errors::Result;

/// Durable mapping from a `YYYY-MM-DD` key to a serialized daily snapshot.
///
/// Values are opaque JSON strings to the store. Each call is an atomic
/// single-key operation; `put_snapshot` replaces any existing value.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn get_snapshot(&self, date_key: &str) -> Result<Option<String>>;
    async fn put_snapshot(&self, date_key: &str, payload: String) -> Result<()>;
}
