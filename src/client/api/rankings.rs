//! Guild rankings API trait

use async_trait::async_trait;

use crate::client::models::RankingResponse;
use crate::error::Result;

/// Guild rankings operations
#[async_trait]
pub trait RankingsApi: Send + Sync {
    /// Fetch the guild's member rankings for one zone.
    ///
    /// Fails with `ApiError::NotFound` when the upstream envelope lacks the guild.
    async fn fetch_rankings(&self, zone_id: i64) -> Result<RankingResponse>;
}
