//! Command execution context
//!
//! Provides a unified context for commands that talk to the upstream:
//! configuration, credential validation and client construction.

use std::sync::Arc;

use crate::cache::{CacheStore, CachedWclClient, FileCache};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::WclClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Validated configuration
    pub config: Config,
    /// Upstream client with caching (Arc-wrapped so the server can share it)
    pub client: Arc<CachedWclClient<WclClient>>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if credentials are missing, an endpoint URL is invalid,
    /// or the HTTP client cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = opts.to_config();
        config.validate()?;
        config.require_credentials()?;

        let raw_client = WclClient::new(&config)?;

        // Wrap with caching layer (disabled if --no-cache)
        let cache: Option<Arc<dyn CacheStore>> = if opts.no_cache {
            log::debug!("Response cache disabled");
            None
        } else {
            Some(Arc::new(FileCache::new(config.cache_dir.clone())))
        };
        let client = Arc::new(CachedWclClient::new(raw_client, cache));

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }
}
