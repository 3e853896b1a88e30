//! Local cache for upstream ranking responses
//!
//! One JSON file per key under the cache directory, each holding the value
//! and the time it was stored. Entries older than their TTL are deleted on
//! read and never returned stale.

pub mod client;
pub mod key;
#[cfg(test)]
pub mod memory;
pub mod storage;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::CacheError;

/// Cache TTL configuration per data type
pub struct CacheTtl;

impl CacheTtl {
    // Guild rankings only move when new logs are uploaded
    pub const RANKINGS: Duration = Duration::from_secs(60 * 60); // 1 hr
}

/// Key/value store with fixed time-to-live.
///
/// Reads never fail: a missing, unreadable or expired entry is a miss.
/// Writes report failures to the caller.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get a live entry, deleting it first if it has expired.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key` stamped with the current time, replacing any prior entry.
    async fn set(&self, key: &str, value: &Value) -> Result<(), CacheError>;
}

/// Whether an entry stored at `stored_at_ms` is past `ttl` at `now_ms`.
pub(crate) fn is_expired(stored_at_ms: i64, now_ms: i64, ttl: Duration) -> bool {
    let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
    now_ms.saturating_sub(stored_at_ms) >= ttl_ms
}

// Re-export main types
pub use client::CachedWclClient;
pub use key::rankings_key;
#[cfg(test)]
pub use memory::MemoryCache;
pub use storage::FileCache;
