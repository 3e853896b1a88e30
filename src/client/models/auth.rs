//! Authentication models

use serde::Deserialize;

/// Bearer token returned by the client-credentials exchange.
///
/// Single use: acquired fresh for every upstream query and never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    /// The bearer token string
    pub access_token: String,

    /// Token type reported by the upstream (normally "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,

    /// Lifetime in seconds reported by the upstream; informational only
    #[serde(default)]
    pub expires_in: Option<u64>,
}
