//! Mock rankings client for testing
//!
//! Provides a mock implementation of [`RankingsApi`] so the cache layer,
//! the all-stars aggregation and the HTTP handlers can be tested without
//! making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::RankingsApi;
use super::models::RankingResponse;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockWclClient::new()
///     .with_rankings(1028, RankingResponseBuilder::new().build());
///
/// let response = mock.fetch_rankings(1028).await?;
/// assert_eq!(mock.call_count().await, 1);
/// ```
#[derive(Clone, Default)]
pub struct MockWclClient {
    /// Documents returned per zone (validated like the real client)
    responses: Arc<Mutex<HashMap<i64, RankingResponse>>>,
    /// Errors returned per zone - consumed on first use
    errors: Arc<Mutex<HashMap<i64, ApiError>>>,
    /// Zones requested, in call order
    calls: Arc<Mutex<Vec<i64>>>,
}

impl MockWclClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document returned for a zone.
    pub fn with_rankings(self, zone_id: i64, response: RankingResponse) -> Self {
        self.responses
            .try_lock()
            .expect("mock not shared yet")
            .insert(zone_id, response);
        self
    }

    /// Make the next call for a zone fail with the given error.
    pub fn with_error(self, zone_id: i64, error: ApiError) -> Self {
        self.errors
            .try_lock()
            .expect("mock not shared yet")
            .insert(zone_id, error);
        self
    }

    /// Total number of fetch calls made.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Zones requested, in call order.
    pub async fn calls(&self) -> Vec<i64> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl RankingsApi for MockWclClient {
    async fn fetch_rankings(&self, zone_id: i64) -> Result<RankingResponse> {
        self.calls.lock().await.push(zone_id);

        if let Some(err) = self.errors.lock().await.remove(&zone_id) {
            return Err(err.into());
        }

        let response = self
            .responses
            .lock()
            .await
            .get(&zone_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Guild not found".to_string()))?;

        Ok(response.validate()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::RankingResponseBuilder;

    #[tokio::test]
    async fn test_mock_returns_configured_rankings() {
        let mock = MockWclClient::new().with_rankings(1028, RankingResponseBuilder::new().build());

        let response = mock.fetch_rankings(1028).await.unwrap();
        assert!(response.has_guild());
        assert_eq!(mock.calls().await, vec![1028]);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_on_first_use() {
        let mock = MockWclClient::new()
            .with_rankings(1028, RankingResponseBuilder::new().build())
            .with_error(
                1028,
                ApiError::UpstreamHttp {
                    status: 503,
                    body: String::new(),
                },
            );

        assert!(mock.fetch_rankings(1028).await.is_err());
        assert!(mock.fetch_rankings(1028).await.is_ok());
        assert_eq!(mock.call_count().await, 2);
    }

    #[tokio::test]
    async fn test_mock_unknown_zone_is_not_found() {
        let mock = MockWclClient::new();
        let err = mock.fetch_rankings(9999).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
