//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::AccessToken;
use crate::error::Result;

/// Credential exchange against the upstream authorization endpoint
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange the configured client id/secret for a fresh bearer token.
    ///
    /// No caching: every call performs a new exchange.
    async fn access_token(&self) -> Result<AccessToken>;
}
