//! Error types for guildboard

use thiserror::Error;

/// Result type alias for guildboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Bot(#[from] BotError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the upstream answered with a well-formed envelope that lacks the guild.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(ApiError::NotFound(_)))
    }
}

/// Upstream API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamHttp { status: u16, body: String },

    #[error("{0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Cache storage errors. Only writes surface these; failed reads are misses.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Failed to encode cache entry: {0}")]
    Json(#[from] serde_json::Error),
}

/// GRM roster file errors
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to open roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse roster file: {0}")]
    Csv(#[from] csv::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Upstream client credentials not configured. Set WCL_CLIENT_ID and WCL_CLIENT_SECRET.")]
    MissingCredentials,

    #[error("Chat bot token not configured. Set DISCORD_TOKEN.")]
    MissingBotToken,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Chat bot errors
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to build chat client: {0}")]
    Build(String),

    #[error("Chat client error: {0}")]
    Gateway(String),
}
