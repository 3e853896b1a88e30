//! Warcraft Logs API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;

use super::api::{AuthApi, RankingsApi};
use super::models::{AccessToken, RankingResponse};
use super::query::{GraphQlRequest, rankings_query};
use crate::config::{Config, Credentials, Endpoints, GuildIdentity};
use crate::error::{ApiError, Result};

/// Request timeout applied to both the token exchange and GraphQL queries
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Warcraft Logs API client.
///
/// Every rankings query performs its own client-credentials exchange first;
/// tokens are never reused.
pub struct WclClient {
    http: HttpClient,
    credentials: Credentials,
    endpoints: Endpoints,
    guild: GuildIdentity,
}

impl WclClient {
    /// Create a new client from validated configuration.
    ///
    /// # Errors
    /// Returns an error if credentials are missing or the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let credentials = config.require_credentials()?.clone();

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            credentials,
            endpoints: config.endpoints.clone(),
            guild: config.guild.clone(),
        })
    }
}

#[async_trait]
impl AuthApi for WclClient {
    async fn access_token(&self) -> Result<AccessToken> {
        let response = self
            .http
            .post(&self.endpoints.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Auth(format!("Failed to read token response: {}", e)))?;

        if !status.is_success() {
            return Err(ApiError::Auth(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                body
            ))
            .into());
        }

        let token: AccessToken = serde_json::from_str(&body)
            .map_err(|e| ApiError::Auth(format!("Invalid token response: {}", e)))?;

        Ok(token)
    }
}

#[async_trait]
impl RankingsApi for WclClient {
    async fn fetch_rankings(&self, zone_id: i64) -> Result<RankingResponse> {
        let token = self.access_token().await?;

        let request = GraphQlRequest {
            query: rankings_query(&self.guild, zone_id),
        };
        log::debug!("Querying guild rankings for zone {}", zone_id);

        let response = self
            .http
            .post(&self.endpoints.api_url)
            .bearer_auth(&token.access_token)
            .json(&request)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            return Err(ApiError::UpstreamHttp {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let document: Value = serde_json::from_str(&body)
            .map_err(|_| ApiError::InvalidResponse("Invalid JSON response".to_string()))?;

        Ok(RankingResponse::new(document).validate()?)
    }
}
