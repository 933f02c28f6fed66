//! In-memory fakes shared by the core tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::SnapshotStore;
use crate::errors::{DatabaseError, Result};
use pairlist_market_data::MarketEntry;

#[derive(Clone, Default)]
pub(crate) struct MockSnapshotStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    reads: Arc<Mutex<Vec<String>>>,
    fail_on_put: Arc<Mutex<bool>>,
}

impl MockSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_entries(&self, date_key: &str, entries: &[MarketEntry]) {
        let payload = serde_json::to_string(entries).unwrap();
        self.insert_raw(date_key, &payload);
    }

    pub fn insert_raw(&self, date_key: &str, payload: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(date_key.to_string(), payload.to_string());
    }

    pub fn set_fail_on_put(&self, fail: bool) {
        *self.fail_on_put.lock().unwrap() = fail;
    }

    pub fn raw(&self, date_key: &str) -> Option<String> {
        self.values.lock().unwrap().get(date_key).cloned()
    }

    pub fn len(&self) -> usize {
        self.values.lock().unwrap().len()
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotStore for MockSnapshotStore {
    async fn get_snapshot(&self, date_key: &str) -> Result<Option<String>> {
        self.reads.lock().unwrap().push(date_key.to_string());
        Ok(self.values.lock().unwrap().get(date_key).cloned())
    }

    async fn put_snapshot(&self, date_key: &str, payload: String) -> Result<()> {
        if *self.fail_on_put.lock().unwrap() {
            return Err(DatabaseError::QueryFailed("Intentional put failure".into()).into());
        }
        self.values
            .lock()
            .unwrap()
            .insert(date_key.to_string(), payload);
        Ok(())
    }
}
