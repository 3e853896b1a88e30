//! In-memory cache storage for tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{CacheStore, CacheTtl, is_expired};
use crate::error::CacheError;

/// Process-local cache with the same expiry contract as [`FileCache`](super::FileCache).
#[derive(Debug)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (Value, DateTime<Utc>)>>,
    ttl: Duration,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: CacheTtl::RANKINGS,
        }
    }

    /// Override the entry TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Store an entry with an explicit timestamp.
    pub fn insert_at(&self, key: &str, value: Value, stored_at: DateTime<Utc>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), (value, stored_at));
        }
    }

    /// Timestamp of the entry for `key`, expired or not.
    pub fn stored_at(&self, key: &str) -> Option<DateTime<Utc>> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).map(|(_, ts)| *ts)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().ok()?;
        let stored_at = entries.get(key)?.1;

        let now = Utc::now().timestamp_millis();
        if is_expired(stored_at.timestamp_millis(), now, self.ttl) {
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|(value, _)| value.clone())
    }

    async fn set(&self, key: &str, value: &Value) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CacheError::Io("cache lock poisoned".to_string()))?;
        entries.insert(key.to_string(), (value.clone(), Utc::now()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_get() {
        let cache = MemoryCache::new();
        cache.set("zone-1028", &json!({ "a": 1 })).await.unwrap();

        assert_eq!(cache.get("zone-1028").await, Some(json!({ "a": 1 })));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_removed() {
        let cache = MemoryCache::new();
        cache.insert_at("zone-1028", json!(1), Utc::now() - chrono::Duration::hours(2));

        assert_eq!(cache.get("zone-1028").await, None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_entry_at_exact_ttl_is_expired() {
        let cache = MemoryCache::new().with_ttl(Duration::from_secs(60));
        cache.insert_at("k", json!(1), Utc::now() - chrono::Duration::seconds(60));

        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test]
    async fn test_set_refreshes_timestamp() {
        let cache = MemoryCache::new();
        let old = Utc::now() - chrono::Duration::minutes(30);
        cache.insert_at("k", json!(1), old);

        cache.set("k", &json!(2)).await.unwrap();

        assert!(cache.stored_at("k").unwrap() > old);
        assert_eq!(cache.get("k").await, Some(json!(2)));
    }
}
