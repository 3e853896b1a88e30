//! Cached wrapper for the rankings client
//!
//! Adds the cache-check and cache-write steps around any [`RankingsApi`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::{CacheStore, rankings_key};
use crate::client::RankingsApi;
use crate::client::models::RankingResponse;
use crate::error::Result;

/// Cached wrapper for any RankingsApi implementation.
///
/// A hit returns the stored document without touching the inner client, so
/// no token exchange happens. A miss delegates to the inner client and stores
/// its validated response. Errors are never cached.
///
/// Concurrent misses for the same zone each fetch and each write; the last
/// write wins.
pub struct CachedWclClient<C: RankingsApi> {
    inner: Arc<C>,
    cache: Option<Arc<dyn CacheStore>>,
}

impl<C: RankingsApi> CachedWclClient<C> {
    /// Create a new cached client wrapper.
    ///
    /// # Arguments
    /// * `inner` - The underlying API client to wrap
    /// * `cache` - Backing store, or `None` to always fetch (for --no-cache)
    pub fn new(inner: C, cache: Option<Arc<dyn CacheStore>>) -> Self {
        Self {
            inner: Arc::new(inner),
            cache,
        }
    }
}

#[async_trait]
impl<C: RankingsApi + 'static> RankingsApi for CachedWclClient<C> {
    async fn fetch_rankings(&self, zone_id: i64) -> Result<RankingResponse> {
        let key = rankings_key(zone_id);

        // A stored null can never pass validation, so it counts as a miss.
        if let Some(ref cache) = self.cache
            && let Some(cached) = cache.get(&key).await
            && !cached.is_null()
        {
            log::debug!("Cache hit: {}", key);
            return Ok(RankingResponse::new(cached));
        }
        log::debug!("Cache miss: {}", key);

        let response = self.inner.fetch_rankings(zone_id).await?;

        if let Some(ref cache) = self.cache {
            cache.set(&key, response.as_value()).await?;
        }
        Ok(response)
    }
}
