//! Configuration for guildboard
//!
//! Built once at startup from command-line flags and environment variables,
//! then shared read-only with the upstream client and the HTTP server.

use std::fmt;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default Warcraft Logs OAuth token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://www.warcraftlogs.com/oauth/token";

/// Default Warcraft Logs v2 GraphQL endpoint
pub const DEFAULT_API_URL: &str = "https://www.warcraftlogs.com/api/v2/client";

/// Zone queried when a request does not name one
pub const DEFAULT_ZONE_ID: i64 = 1028;

/// Zones included in the all-stars aggregation, in query order
pub const ALLSTARS_ZONES: [i64; 3] = [1028, 1034, 1035];

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Upstream client-credentials pair
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Upstream endpoint URLs
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// OAuth client-credentials endpoint
    pub token_url: String,
    /// GraphQL endpoint
    pub api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// The guild whose roster is queried. Fixed for a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildIdentity {
    pub id: u64,
    pub server_slug: String,
    pub server_region: String,
    /// Maximum number of members requested per query
    pub member_limit: u32,
}

impl Default for GuildIdentity {
    fn default() -> Self {
        Self {
            id: 774625,
            server_slug: "dreamscythe".to_string(),
            server_region: "US".to_string(),
            member_limit: 56,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream credentials, if configured
    pub credentials: Option<Credentials>,

    /// Upstream endpoints
    pub endpoints: Endpoints,

    /// Guild identity baked into every rankings query
    pub guild: GuildIdentity,

    /// Directory holding one cache file per key
    pub cache_dir: PathBuf,

    /// GRM roster CSV export
    pub grm_path: PathBuf,

    /// Directory of static frontend assets
    pub static_dir: PathBuf,

    /// Zones aggregated by the all-stars endpoint
    pub allstars_zones: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: None,
            endpoints: Endpoints::default(),
            guild: GuildIdentity::default(),
            cache_dir: PathBuf::from(".cache"),
            grm_path: PathBuf::from("db").join("grm.csv"),
            static_dir: PathBuf::from("frontend"),
            allstars_zones: ALLSTARS_ZONES.to_vec(),
        }
    }
}

impl Config {
    /// Set credentials from optional id/secret values; both must be non-empty.
    pub fn with_credentials(
        mut self,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Self {
        self.credentials = match (client_id, client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Some(Credentials::new(id, secret))
            }
            _ => None,
        };
        self
    }

    /// Get the upstream credentials, returning an error if not set.
    pub fn require_credentials(&self) -> Result<&Credentials> {
        self.credentials
            .as_ref()
            .ok_or_else(|| ConfigError::MissingCredentials.into())
    }

    /// Check endpoint URLs are usable before any request is made.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("token URL", &self.endpoints.token_url),
            ("API URL", &self.endpoints.api_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                let msg = format!("{} must be http(s): {}", name, url);
                return Err(ConfigError::Invalid(msg).into());
            }
        }
        if self.allstars_zones.is_empty() {
            return Err(ConfigError::Invalid("all-stars zone list is empty".to_string()).into());
        }
        Ok(())
    }
}
