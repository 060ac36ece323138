//! In-memory implementation of the key-value store
//!
//! Entries are expired lazily: an expired entry is treated as absent on read
//! and removed when encountered. A single mutex guards the whole map so
//! `take` is atomic with respect to concurrent consumers.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::kv::KeyValueStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// In-memory TTL key-value store
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl InMemoryKeyValueStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        let mut entries = self.entries.lock().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Utc::now() + Duration::seconds(ttl_seconds as i64),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let mut entries = self.entries.lock().await;
        let expired = entries.get(key).is_some_and(|e| e.is_expired());
        if expired {
            entries.remove(key);
            return Ok(None);
        }
        Ok(entries.get(key).map(|e| e.value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        let mut entries = self.entries.lock().await;
        match entries.remove(key) {
            Some(entry) => Ok(!entry.is_expired()),
            None => Ok(false),
        }
    }

    async fn take(&self, key: &str) -> Result<Option<String>, String> {
        let mut entries = self.entries.lock().await;
        match entries.remove(key) {
            Some(entry) if entry.is_expired() => Ok(None),
            Some(entry) => Ok(Some(entry.value)),
            None => Ok(None),
        }
    }

    async fn ttl(&self, key: &str) -> Result<Option<i64>, String> {
        let mut entries = self.entries.lock().await;
        let expired = entries.get(key).is_some_and(|e| e.is_expired());
        if expired {
            entries.remove(key);
            return Ok(None);
        }
        Ok(entries
            .get(key)
            .map(|e| (e.expires_at - Utc::now()).num_seconds()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v", 60).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_overwrite_resets_value() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "first", 60).await.unwrap();
        store.set("k", "second", 60).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_expired_entry_is_absent() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v", 0).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
        assert_eq!(store.ttl("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_take_removes_entry() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v", 60).await.unwrap();

        assert_eq!(store.take("k").await.unwrap(), Some("v".to_string()));
        assert_eq!(store.take("k").await.unwrap(), None);
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v", 60).await.unwrap();

        assert!(store.delete("k").await.unwrap());
        assert!(!store.delete("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_ttl_is_positive_for_live_entry() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v", 120).await.unwrap();

        let ttl = store.ttl("k").await.unwrap().unwrap();
        assert!(ttl > 0 && ttl <= 120);
    }
}
