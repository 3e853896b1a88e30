//! Global CLI options shared across all commands
//!
//! Collects the global flags (and their environment fallbacks) into one
//! struct so handlers take a single argument, and turns them into the
//! immutable [`Config`] used for the rest of the run.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::{Config, Endpoints};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable (including `.env`) > built-in default.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, json)
    pub format: OutputFormat,

    /// Directory holding cached upstream responses
    pub cache_dir: PathBuf,

    /// Bypass cache and fetch fresh data from the upstream
    pub no_cache: bool,

    /// Upstream client id
    pub client_id: Option<String>,

    /// Upstream client secret
    pub client_secret: Option<String>,

    /// Upstream OAuth token endpoint override
    pub token_url: Option<String>,

    /// Upstream GraphQL endpoint override
    pub api_url: Option<String>,

    /// GRM roster CSV path
    pub grm_path: PathBuf,

    /// Static frontend directory
    pub static_dir: PathBuf,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    ///
    /// This is the primary constructor, called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            cache_dir: cli.cache_dir.clone(),
            no_cache: cli.no_cache,
            client_id: cli.client_id.clone(),
            client_secret: cli.client_secret.clone(),
            token_url: cli.token_url.clone(),
            api_url: cli.api_url.clone(),
            grm_path: cli.grm_path.clone(),
            static_dir: cli.static_dir.clone(),
        }
    }

    /// Build the run configuration. Credentials are optional here; commands
    /// that talk to the upstream check for them.
    pub fn to_config(&self) -> Config {
        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            token_url: self.token_url.clone().unwrap_or(defaults.token_url),
            api_url: self.api_url.clone().unwrap_or(defaults.api_url),
        };

        Config {
            endpoints,
            cache_dir: self.cache_dir.clone(),
            grm_path: self.grm_path.clone(),
            static_dir: self.static_dir.clone(),
            ..Config::default()
        }
        .with_credentials(self.client_id.clone(), self.client_secret.clone())
    }
}
